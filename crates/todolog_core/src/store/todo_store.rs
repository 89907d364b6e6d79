//! Todo store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `todos` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Todo::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `find_and_update` and `find_and_delete` run the mutation and the
//!   record read-back inside one immediate transaction.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::request::UpdateTodoRequest;
use crate::model::todo::{Todo, TodoId, TodoValidationError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TODO_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    description,
    completed,
    created_at
FROM todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from todo persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    /// Record failed domain validation before or after persistence.
    Validation(TodoValidationError),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "todo store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "todo store requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "todo store requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store interface for todo CRUD operations.
pub trait TodoStore {
    /// Persists one validated todo and returns its stable id.
    fn insert(&mut self, todo: &Todo) -> StoreResult<TodoId>;
    /// Returns every stored todo in default scan order.
    fn find_all(&self) -> StoreResult<Vec<Todo>>;
    /// Returns one todo by id, `None` when absent.
    fn find_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>>;
    /// Applies a partial patch and returns the updated record, `None` when
    /// absent.
    fn find_and_update(
        &mut self,
        id: TodoId,
        patch: &UpdateTodoRequest,
    ) -> StoreResult<Option<Todo>>;
    /// Deletes one todo and returns its last stored state, `None` when
    /// absent.
    fn find_and_delete(&mut self, id: TodoId) -> StoreResult<Option<Todo>>;
}

/// SQLite-backed todo store.
pub struct SqliteTodoStore {
    conn: Connection,
}

impl SqliteTodoStore {
    /// Constructs a store from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not
    ///   match the latest migration version.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the `todos`
    ///   schema is incomplete.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self { conn })
    }
}

impl TodoStore for SqliteTodoStore {
    fn insert(&mut self, todo: &Todo) -> StoreResult<TodoId> {
        todo.validate()?;

        self.conn.execute(
            "INSERT INTO todos (
                uuid,
                title,
                description,
                completed,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                todo.id.to_string(),
                todo.title.as_str(),
                todo.description.as_deref(),
                bool_to_int(todo.completed),
                todo.created_at,
            ],
        )?;

        Ok(todo.id)
    }

    fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(TODO_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut todos = Vec::new();

        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }

    fn find_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        query_todo(&self.conn, id)
    }

    fn find_and_update(
        &mut self,
        id: TodoId,
        patch: &UpdateTodoRequest,
    ) -> StoreResult<Option<Todo>> {
        if let Some(title) = patch.title.as_deref() {
            if title.trim().is_empty() {
                return Err(StoreError::Validation(TodoValidationError::EmptyTitle));
            }
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if patch.is_empty() {
            let current = query_todo(&tx, id)?;
            tx.commit()?;
            return Ok(current);
        }

        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(title) = patch.title.as_ref() {
            assignments.push("title = ?");
            bind_values.push(Value::Text(title.clone()));
        }
        if let Some(description) = patch.description.as_ref() {
            assignments.push("description = ?");
            bind_values.push(Value::Text(description.clone()));
        }
        if let Some(completed) = patch.completed {
            assignments.push("completed = ?");
            bind_values.push(Value::Integer(bool_to_int(completed)));
        }

        let sql = format!(
            "UPDATE todos SET {} WHERE uuid = ?;",
            assignments.join(", ")
        );
        bind_values.push(Value::Text(id.to_string()));

        let changed = tx.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Ok(None);
        }

        let updated = query_todo(&tx, id)?;
        tx.commit()?;
        Ok(updated)
    }

    fn find_and_delete(&mut self, id: TodoId) -> StoreResult<Option<Todo>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let Some(existing) = query_todo(&tx, id)? else {
            return Ok(None);
        };

        tx.execute("DELETE FROM todos WHERE uuid = ?1;", [id.to_string()])?;
        tx.commit()?;
        Ok(Some(existing))
    }
}

fn query_todo(conn: &Connection, id: TodoId) -> StoreResult<Option<Todo>> {
    let mut stmt = conn.prepare(&format!("{TODO_SELECT_SQL} WHERE uuid = ?1;"))?;
    let mut rows = stmt.query([id.to_string()])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_todo_row(row)?));
    }

    Ok(None)
}

fn parse_todo_row(row: &Row<'_>) -> StoreResult<Todo> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{uuid_text}` in todos.uuid"))
    })?;

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid completed value `{other}` in todos.completed"
            )));
        }
    };

    let todo = Todo {
        id: uuid,
        title: row.get("title")?,
        description: row.get("description")?,
        completed,
        created_at: row.get("created_at")?,
    };
    todo.validate()?;
    Ok(todo)
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "todos")? {
        return Err(StoreError::MissingRequiredTable("todos"));
    }

    for column in ["uuid", "title", "description", "completed", "created_at"] {
        if !table_has_column(conn, "todos", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "todos",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
