//! Health check and API root endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
///
/// Health check endpoint for monitoring.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "savorlog-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api
///
/// Simple liveness message at the API root.
pub async fn api_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "SavorLog API is running" }))
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
