//! Fallback normalization for provider calls.
//!
//! A single unreachable provider must not abort the whole investigation, so
//! failures are absorbed here and replaced by the dimension's zero-risk
//! default when the report is assembled. The tagged outcome keeps "provider
//! unreachable" distinguishable from "verified safe" until then.

use probe_common::types::RiskDimension;
use probe_providers::ProviderError;

/// Outcome of one normalized provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionOutcome<T> {
    /// The provider answered with a well-formed result.
    Available(T),
    /// The provider was unreachable or answered garbage; the dimension falls
    /// back to its zero-risk default.
    Degraded,
}

impl<T: Default> DimensionOutcome<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, DimensionOutcome::Degraded)
    }

    /// The provider's result, or the zero-risk default when degraded.
    pub fn resolve(self) -> T {
        match self {
            DimensionOutcome::Available(value) => value,
            DimensionOutcome::Degraded => T::default(),
        }
    }
}

/// Absorb a provider error into a degraded outcome.
///
/// The error is logged for observability and never propagated; the zero-risk
/// substitution is deliberately optimistic, not an "unknown" state.
pub fn normalize<T>(
    dimension: RiskDimension,
    address: &str,
    result: Result<T, ProviderError>,
) -> DimensionOutcome<T> {
    match result {
        Ok(value) => DimensionOutcome::Available(value),
        Err(err) => {
            tracing::warn!(
                %dimension,
                address,
                error = %err,
                "provider call failed, degrading to zero-risk default"
            );
            DimensionOutcome::Degraded
        }
    }
}
