//! HTTP surface: the single-page UI and the analyze endpoint.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::AppState;

/// Build the HTTP routes over shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // UI
        .route("/", get(handlers::index))
        // Health check
        .route("/health", get(handlers::health_check))
        // Analysis
        .route("/analyze", post(handlers::analyze))
        .route("/decoders", get(handlers::list_decoders))
        // State
        .with_state(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
