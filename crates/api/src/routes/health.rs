//! Health check endpoint.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use probe_providers::RiskProvider;

use crate::state::AppState;

pub fn router<P: RiskProvider + 'static>() -> Router<AppState<P>> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "chainprobe-risk-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
