//! ChainProbe risk API server binary entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use probe_common::config::AppConfig;
use probe_engine::{RiskAggregator, RiskWeights};
use probe_providers::WebacyClient;

use probe_api::middleware::rate_limit::with_rate_limit;
use probe_api::routes::create_router;
use probe_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("probe_api=debug,probe_engine=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting ChainProbe risk API server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    // Startup invariant: the composite-score weights must sum to 1.0
    let weights = RiskWeights::default();
    weights.validate()?;

    // Build the provider client and aggregation engine
    let provider = WebacyClient::new(
        &config.webacy_api_url,
        &config.webacy_api_key,
        Duration::from_secs(config.provider_timeout_secs),
    )?;
    let aggregator = RiskAggregator::with_weights(provider, weights);
    tracing::info!(base_url = %config.webacy_api_url, "Provider client ready");

    // Build application state
    let port = config.port;
    let cors = cors_layer(&config);
    let rate_limit_max = config.rate_limit_max_requests;
    let rate_limit_window = Duration::from_secs(config.rate_limit_window_secs);
    let state = AppState::new(aggregator, config);

    // Build router
    let app = with_rate_limit(create_router(state), rate_limit_max, rate_limit_window)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS restricted to the configured frontend origins.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
