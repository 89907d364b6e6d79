//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical record managed by the lifecycle service.
//! - Enforce stored-record invariants before persistence.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `created_at` is assigned once at creation and never mutated.
//! - A valid stored record has a non-nil `id` and a non-empty `title`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every persisted todo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Violation of a stored-record invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// `id` is the nil UUID, which can never identify a stored record.
    NilId,
    /// `title` is empty or whitespace-only.
    EmptyTitle,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "todo id must not be the nil uuid"),
            Self::EmptyTitle => write!(f, "todo title must not be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// Canonical persisted record for one todo item.
///
/// The wire shape keeps `createdAt` in external naming; everything else
/// serializes under its field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable global ID used for lookups and audit metadata.
    pub id: TodoId,
    /// Required short text. Never empty for a stored record.
    pub title: String,
    /// Optional free-form detail text. Omitted from the wire shape when
    /// absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag. Starts as `false`.
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds, immutable after creation.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Todo {
    /// Creates a new record with a generated stable ID and creation time.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - `created_at` is minted here and must not change afterwards.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, description)
    }

    /// Creates a record with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists. The
    /// constructor does not validate; store write paths do.
    pub fn with_id(id: TodoId, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description,
            completed: false,
            created_at: epoch_millis_now(),
        }
    }

    /// Checks stored-record invariants.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyTitle` when `title` trims to an empty string.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Clamps instead of failing: a pre-epoch clock yields 0.
fn epoch_millis_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}
