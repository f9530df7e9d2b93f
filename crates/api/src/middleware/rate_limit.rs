//! Request rate limiting.
//!
//! Tower's `RateLimit` throttles by backpressure, so it is paired with a
//! load-shed layer that rejects requests outright once the window's budget
//! is spent, and a buffer that makes the stack cloneable for Axum. Shed
//! requests surface as 429 instead of queueing.

use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use serde_json::json;
use tower::buffer::BufferLayer;
use tower::limit::RateLimitLayer;
use tower::load_shed::LoadShedLayer;
use tower::{BoxError, ServiceBuilder};

/// Cap the whole router at `max_requests` per `window`.
pub fn with_rate_limit(router: Router, max_requests: u64, window: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(BufferLayer::new(1024))
            .layer(LoadShedLayer::new())
            .layer(RateLimitLayer::new(max_requests, window)),
    )
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, Json<serde_json::Value>) {
    if err.is::<tower::load_shed::error::Overloaded>() {
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "Too many requests, please try again later" })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Unhandled middleware error: {}", err) })),
        )
    }
}
