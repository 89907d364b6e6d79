//! Storage layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Store writes must enforce `Todo::validate()` before persistence.
//! - Store lookups report absence as `Ok(None)`; semantic not-found stays
//!   a service concern.

pub mod todo_store;
