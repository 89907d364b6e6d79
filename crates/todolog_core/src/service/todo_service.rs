//! Todo use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for transport callers.
//! - Translate storage absence into semantic not-found errors.
//! - Emit one audit line per successful operation.
//!
//! # Invariants
//! - Audit lines are emitted only after the storage call succeeded.
//! - Storage failures propagate unchanged and are never audited here.
//! - Service layer remains storage-agnostic.

use crate::audit::{json_value, AuditLog, LogMetadata};
use crate::model::request::{CreateTodoRequest, UpdateTodoRequest};
use crate::model::todo::{Todo, TodoId};
use crate::store::todo_store::{StoreError, TodoStore};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, TodoServiceError>;

/// Errors surfaced by todo use-case operations.
#[derive(Debug)]
pub enum TodoServiceError {
    /// No todo exists under the requested id.
    NotFound(TodoId),
    /// Underlying storage failure.
    Store(StoreError),
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Todo with ID {id} not found"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TodoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for TodoServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service wrapper for todo CRUD operations.
pub struct TodoService<S: TodoStore, L: AuditLog> {
    store: S,
    audit: L,
}

impl<S: TodoStore, L: AuditLog> TodoService<S, L> {
    /// Creates a service using the provided store and audit sink.
    pub fn new(store: S, audit: L) -> Self {
        Self { store, audit }
    }

    /// Creates one todo from request input and returns the stored record.
    ///
    /// # Contract
    /// - Mints the id and creation timestamp before persistence.
    /// - Persists in a single write; no read-back round trip.
    /// - Audits `Todo created` with the full record after success.
    pub fn create(&mut self, request: CreateTodoRequest) -> ServiceResult<Todo> {
        let todo = Todo::new(request.title, request.description);
        self.store.insert(&todo)?;
        self.audit.log(
            "Todo created",
            &LogMetadata::new()
                .push("action", "create")
                .push("todoId", todo.id.to_string())
                .push("todo", json_value(&todo)),
        );
        Ok(todo)
    }

    /// Returns every stored todo.
    pub fn find_all(&self) -> ServiceResult<Vec<Todo>> {
        let todos = self.store.find_all()?;
        self.audit.log(
            "Todos retrieved",
            &LogMetadata::new()
                .push("action", "findAll")
                .push("count", todos.len().to_string()),
        );
        Ok(todos)
    }

    /// Returns one todo by id.
    ///
    /// # Errors
    /// - `TodoServiceError::NotFound` when no record exists under `id`.
    pub fn find_one(&self, id: TodoId) -> ServiceResult<Todo> {
        let todo = self
            .store
            .find_by_id(id)?
            .ok_or(TodoServiceError::NotFound(id))?;
        self.audit.log(
            "Todo retrieved",
            &LogMetadata::new()
                .push("action", "findOne")
                .push("todoId", id.to_string())
                .push("todo", json_value(&todo)),
        );
        Ok(todo)
    }

    /// Applies a partial patch to one todo and returns the updated record.
    ///
    /// # Contract
    /// - Absent patch fields leave stored values untouched.
    /// - An all-absent patch is a no-op that still returns the record.
    /// - Audited metadata carries only the fields the patch provided.
    ///
    /// # Errors
    /// - `TodoServiceError::NotFound` when no record exists under `id`.
    pub fn update(&mut self, id: TodoId, patch: UpdateTodoRequest) -> ServiceResult<Todo> {
        let todo = self
            .store
            .find_and_update(id, &patch)?
            .ok_or(TodoServiceError::NotFound(id))?;
        self.audit.log(
            "Todo updated",
            &LogMetadata::new()
                .push("action", "update")
                .push("todoId", id.to_string())
                .push("updates", json_value(&patch)),
        );
        Ok(todo)
    }

    /// Deletes one todo and returns its last stored state.
    ///
    /// # Errors
    /// - `TodoServiceError::NotFound` when no record exists under `id`.
    pub fn remove(&mut self, id: TodoId) -> ServiceResult<Todo> {
        let todo = self
            .store
            .find_and_delete(id)?
            .ok_or(TodoServiceError::NotFound(id))?;
        self.audit.log(
            "Todo deleted",
            &LogMetadata::new()
                .push("action", "delete")
                .push("todoId", id.to_string()),
        );
        Ok(todo)
    }
}
