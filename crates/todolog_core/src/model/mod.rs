//! Domain model for the todo lifecycle.
//!
//! # Responsibility
//! - Define the canonical persisted record shape.
//! - Define the request contracts accepted at the service boundary.
//!
//! # Invariants
//! - Every persisted record is identified by a stable `TodoId`.
//! - Deletion is a hard delete; no tombstone state exists in the model.

pub mod request;
pub mod todo;
