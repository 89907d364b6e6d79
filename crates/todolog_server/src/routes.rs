//! HTTP handlers for the todo CRUD surface.
//!
//! # Responsibility
//! - Map request payloads and path parameters onto core service calls.
//! - Keep handlers free of storage and audit logic.
//!
//! # Invariants
//! - Handlers take the service lock per call and release it before
//!   responding.

use crate::error::ApiError;
use crate::state::{AppState, ServerService};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use std::sync::{Arc, MutexGuard};
use todolog_core::{core_version, ping, CreateTodoRequest, Todo, TodoId, UpdateTodoRequest};

pub async fn health() -> Json<Value> {
    Json(json!({ "ping": ping(), "version": core_version() }))
}

pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = lock_service(&state)?.create(request)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = lock_service(&state)?.find_all()?;
    Ok(Json(todos))
}

pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    let todo = lock_service(&state)?.find_one(id)?;
    Ok(Json(todo))
}

pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TodoId>,
    Json(patch): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let todo = lock_service(&state)?.update(id, patch)?;
    Ok(Json(todo))
}

/// Answers with the deleted record's last stored state.
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    let todo = lock_service(&state)?.remove(id)?;
    Ok(Json(todo))
}

fn lock_service(state: &AppState) -> Result<MutexGuard<'_, ServerService>, ApiError> {
    state
        .service
        .lock()
        .map_err(|_| ApiError::Internal("service state lock poisoned".to_string()))
}
