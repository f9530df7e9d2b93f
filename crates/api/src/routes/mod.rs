pub mod health;
pub mod risk;

use axum::Router;

use probe_providers::RiskProvider;

use crate::state::AppState;

/// Build the complete API router with all routes.
pub fn create_router<P: RiskProvider + 'static>(state: AppState<P>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(risk::router())
        .with_state(state)
}
