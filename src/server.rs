//! HTTP server exposing the recommendation engine

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::presenter::{present, RenderableContent};
use crate::{InputProfile, Recommendation, RecommendationEngine, StyleEntry};

/// Response for a recommendation request
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendation: Recommendation,
    pub content: RenderableContent,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Recommend handler. Unknown labels are accepted and score as no-ops;
/// missing fields or malformed bodies are rejected.
async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    payload: Result<Json<InputProfile>, JsonRejection>,
) -> Result<Json<RecommendResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(profile) = payload.map_err(|rejection| {
        error!("Rejected recommend request: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorResponse {
                error: "Invalid recommend request".to_string(),
                details: Some(rejection.body_text()),
            }),
        )
    })?;

    info!(
        "Received recommend request: level={}, goal='{}', focus={}, age={}",
        profile.level, profile.goal, profile.focus, profile.age
    );

    let recommendation = engine.recommend(&profile);
    let content = present(&recommendation);

    info!(
        "Recommended {} (score {}), backup={:?}",
        recommendation.primary.style.key,
        recommendation.primary.score,
        recommendation.secondary.as_ref().map(|s| s.style.key.as_str())
    );

    Ok(Json(RecommendResponse {
        recommendation,
        content,
    }))
}

/// Catalog listing handler
async fn styles_handler(State(engine): State<Arc<RecommendationEngine>>) -> Json<Vec<StyleEntry>> {
    Json(engine.catalog().all().to_vec())
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "strokefinder".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create and configure the HTTP router
pub fn create_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/styles", get(styles_handler))
        .route("/recommend", post(recommend_handler))
        .with_state(engine)
}

/// Serve on an already-bound listener
pub async fn serve(engine: Arc<RecommendationEngine>, listener: TcpListener) -> anyhow::Result<()> {
    let app = create_router(engine);
    info!("✓ Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Run the HTTP server
pub async fn run_server(engine: Arc<RecommendationEngine>, addr: &str) -> anyhow::Result<()> {
    info!("Starting strokefinder server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    serve(engine, listener).await
}
