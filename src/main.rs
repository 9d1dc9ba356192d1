//! Sentiment Analytics Service - Main Entry Point
//!
//! Serves the upload page and the analyze endpoint.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentiment_analytics::api::{self, handlers::AppState};
use sentiment_analytics::types::ServiceConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "sentiment_analytics=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = ServiceConfig::from_env();

    info!("Starting Sentiment Analytics v{}", env!("CARGO_PKG_VERSION"));

    // Stopwords and lexicon are built once here and shared read-only
    let addr = config.socket_addr();
    let state = Arc::new(AppState::new());
    let app = api::app(state);

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
