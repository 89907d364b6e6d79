//! HTTP error mapping for core service failures.
//!
//! # Responsibility
//! - Translate service errors into status codes and JSON error bodies.
//!
//! # Invariants
//! - Not-found failures keep their exact service message in the body.
//! - Internal failures are logged with detail but answered with a generic
//!   body; storage detail never leaks to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use todolog_core::TodoServiceError;

/// Errors a handler can answer with.
#[derive(Debug)]
pub enum ApiError {
    /// Maps to `404 Not Found` with the service message as body.
    NotFound(String),
    /// Maps to `500 Internal Server Error` with a generic body.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<TodoServiceError> for ApiError {
    fn from(value: TodoServiceError) -> Self {
        match value {
            TodoServiceError::NotFound(_) => Self::NotFound(value.to_string()),
            TodoServiceError::Store(_) => Self::Internal(value.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
            }
            Self::Internal(detail) => {
                error!(
                    "event=http_request module=server status=error error_code=internal error={detail}"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use todolog_core::{StoreError, TodoServiceError};
    use uuid::Uuid;

    #[test]
    fn not_found_keeps_service_message() {
        let id = Uuid::nil();
        let error = ApiError::from(TodoServiceError::NotFound(id));
        match error {
            ApiError::NotFound(message) => {
                assert_eq!(
                    message,
                    "Todo with ID 00000000-0000-0000-0000-000000000000 not found"
                );
            }
            ApiError::Internal(detail) => panic!("expected not-found, got internal: {detail}"),
        }
    }

    #[test]
    fn store_errors_map_to_internal() {
        let error = ApiError::from(TodoServiceError::Store(StoreError::InvalidData(
            "bad row".to_string(),
        )));
        assert!(matches!(error, ApiError::Internal(_)));
    }
}
