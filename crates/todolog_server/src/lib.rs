//! HTTP surface for the todolog backend.
//! Maps verbs and paths onto the core todo service.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use state::{AppState, ServerService};

/// Builds the application router over shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            get(routes::get_todo)
                .put(routes::update_todo)
                .delete(routes::delete_todo),
        )
        .with_state(state)
}

/// Serves the application until the listener closes.
pub async fn run(listener: TcpListener, state: Arc<AppState>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
