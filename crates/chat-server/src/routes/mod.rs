//! Route handlers for the chat server.

pub mod health;
pub mod ws;

use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the router with all routes; anything else is served from `public_dir`.
pub fn router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ws", get(ws::ws_handler))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}
