//! Shared application state for the Axum API server.

use std::sync::Arc;

use probe_common::config::AppConfig;
use probe_engine::RiskAggregator;

/// Application state shared across all route handlers via Axum `State`.
///
/// Generic over the risk provider so integration tests can run the real
/// router against a stub.
pub struct AppState<P> {
    pub aggregator: Arc<RiskAggregator<P>>,
    pub config: AppConfig,
}

impl<P> AppState<P> {
    pub fn new(aggregator: RiskAggregator<P>, config: AppConfig) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            config,
        }
    }
}

// Manual impl: `P` itself does not need to be `Clone` behind the `Arc`.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            aggregator: Arc::clone(&self.aggregator),
            config: self.config.clone(),
        }
    }
}
