//! Shared application state for HTTP handlers.
//!
//! # Responsibility
//! - Hold the todo service behind a lock usable from concurrent handlers.
//!
//! # Invariants
//! - The lock is held only for the duration of one synchronous service
//!   call; handlers never hold it across an await point.

use std::sync::{Arc, Mutex};
use todolog_core::{FacadeAuditLog, SqliteTodoStore, TodoService};

/// Concrete service type wired for production use.
pub type ServerService = TodoService<SqliteTodoStore, FacadeAuditLog>;

/// Process-wide handler state.
pub struct AppState {
    pub service: Mutex<ServerService>,
}

impl AppState {
    /// Wraps the service for shared handler access.
    pub fn new(service: ServerService) -> Arc<Self> {
        Arc::new(Self {
            service: Mutex::new(service),
        })
    }
}
