//! Risk analysis routes.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use probe_common::error::AppError;
use probe_common::types::CompositeReport;
use probe_providers::RiskProvider;

use crate::state::AppState;

pub fn router<P: RiskProvider + 'static>() -> Router<AppState<P>> {
    Router::new().route("/api/risk/{address}", get(analyze_address))
}

/// GET /api/risk/:address — Run the full multi-dimension risk analysis.
///
/// The address is passed through to the providers unmodified; invalid
/// addresses are rejected provider-side and surface as degraded dimensions.
/// Aggregation itself cannot fail: once past the blank check, a fully
/// populated report always comes back.
async fn analyze_address<P: RiskProvider + 'static>(
    State(state): State<AppState<P>>,
    Path(address): Path<String>,
) -> Result<Json<CompositeReport>, AppError> {
    if address.trim().is_empty() {
        return Err(AppError::Validation("address must not be blank".to_string()));
    }

    let report = state.aggregator.aggregate(&address).await;
    Ok(Json(report))
}
