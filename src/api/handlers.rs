//! HTTP request handlers for the analytics service.

use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::pipeline::SentimentPipeline;
use crate::types::{AnalysisResponse, AnalyzeRequest};

/// The single-page UI.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Application state shared across handlers.
///
/// Everything here is immutable after startup.
pub struct AppState {
    pub pipeline: SentimentPipeline,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            pipeline: SentimentPipeline::english(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Serve the upload page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Run an analysis for the submitted upload.
///
/// Always answers 200: pipeline failures come back as a message in the body.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisResponse> {
    Json(state.pipeline.analyze(&request))
}

/// Supported decoder info.
#[derive(Debug, Serialize)]
pub struct DecoderInfo {
    name: String,
    description: String,
}

/// List supported file types.
pub async fn list_decoders(State(state): State<Arc<AppState>>) -> Json<Vec<DecoderInfo>> {
    let decoders = state
        .pipeline
        .router()
        .list_decoders()
        .into_iter()
        .map(|(name, desc)| DecoderInfo {
            name: name.to_string(),
            description: desc.to_string(),
        })
        .collect();

    Json(decoders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::app;
    use crate::types::{SentimentLabel, ViewState};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use tower::ServiceExt;

    fn test_app() -> axum::Router {
        app(Arc::new(AppState::new()))
    }

    async fn post_analyze(body: serde_json::Value) -> (StatusCode, AnalysisResponse) {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_served() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Analyze"));
    }

    #[tokio::test]
    async fn test_analyze_txt() {
        let contents = format!("data:text/plain;base64,{}", STANDARD.encode("What a wonderful day"));
        let (status, body) = post_analyze(serde_json::json!({
            "contents": contents,
            "filename": "day.txt",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.state, ViewState::Displayed);
        let display = body.display.unwrap();
        assert_eq!(display.title, "day.txt");
        assert_eq!(display.rows[0].sentiment_label, SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn test_analyze_unsupported_is_still_ok() {
        let contents = format!("data:application/pdf;base64,{}", STANDARD.encode("%PDF-1.4"));
        let (status, body) = post_analyze(serde_json::json!({
            "contents": contents,
            "filename": "data.pdf",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message.as_deref(), Some("Unsupported file type."));
        assert!(body.chart.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_without_upload() {
        let (status, body) = post_analyze(serde_json::json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.state, ViewState::Idle);
        assert_eq!(body.message.as_deref(), Some("No file uploaded yet."));
    }

    #[tokio::test]
    async fn test_list_decoders() {
        let response = test_app()
            .oneshot(Request::builder().uri("/decoders").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let decoders: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoders.as_array().unwrap().len(), 3);
    }
}
