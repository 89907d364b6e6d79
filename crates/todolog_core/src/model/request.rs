//! Data transfer contracts for todo lifecycle operations.
//!
//! # Responsibility
//! - Define the request shapes accepted from callers.
//! - Keep the wire contract decoupled from the persisted entity shape.
//!
//! # Invariants
//! - `title` on create is the only required field across both contracts.
//! - Update semantics are partial: absent fields leave stored values
//!   untouched.

use serde::{Deserialize, Serialize};

/// Request contract for creating one todo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoRequest {
    /// Required title of the new record.
    pub title: String,
    /// Optional detail text.
    pub description: Option<String>,
}

/// Partial-update contract. Only present fields are applied.
///
/// Serialization skips absent fields so that an audit entry's `updates`
/// value carries exactly the fields the caller sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    /// Replacement title, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement completion flag, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// Returns whether the contract carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateTodoRequest, UpdateTodoRequest};

    #[test]
    fn create_request_rejects_missing_title() {
        let result: Result<CreateTodoRequest, _> =
            serde_json::from_str(r#"{"description":"no title"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_request_defaults_description_to_none() {
        let request: CreateTodoRequest = serde_json::from_str(r#"{"title":"Buy milk"}"#)
            .expect("title-only payload should parse");
        assert_eq!(request.title, "Buy milk");
        assert_eq!(request.description, None);
    }

    #[test]
    fn update_request_accepts_empty_object() {
        let request: UpdateTodoRequest =
            serde_json::from_str("{}").expect("empty payload should parse");
        assert!(request.is_empty());
    }

    #[test]
    fn update_request_accepts_partial_fields() {
        let request: UpdateTodoRequest = serde_json::from_str(r#"{"completed":true}"#)
            .expect("single-field payload should parse");
        assert_eq!(request.completed, Some(true));
        assert_eq!(request.title, None);
        assert!(!request.is_empty());
    }

    #[test]
    fn update_request_serializes_only_present_fields() {
        let request = UpdateTodoRequest {
            title: Some("New title".to_string()),
            ..UpdateTodoRequest::default()
        };
        let json = serde_json::to_string(&request).expect("contract should serialize");
        assert_eq!(json, r#"{"title":"New title"}"#);
    }
}
