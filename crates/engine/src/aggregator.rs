//! Concurrent fan-out across all risk dimensions.
//!
//! One `aggregate` call dispatches the five provider calls at once and joins
//! on all of them; no call waits on another, and no call's failure can reach
//! the caller. The returned report is always fully populated.

use probe_common::types::{CompositeReport, RiskDimension};
use probe_providers::RiskProvider;

use crate::combiner::{RiskBundle, RiskWeights};
use crate::outcome::normalize;

/// Aggregates per-dimension provider results into a [`CompositeReport`].
#[derive(Debug, Clone)]
pub struct RiskAggregator<P> {
    provider: P,
    weights: RiskWeights,
}

impl<P: RiskProvider> RiskAggregator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            weights: RiskWeights::default(),
        }
    }

    /// Replace the default weights. Callers should `validate()` custom
    /// weights before handing them over.
    pub fn with_weights(provider: P, weights: RiskWeights) -> Self {
        Self { provider, weights }
    }

    /// Run the full risk analysis for one address.
    ///
    /// Total function: provider failures degrade the affected dimension to
    /// its zero-risk default and are recorded in `degraded`; this never
    /// returns an error.
    pub async fn aggregate(&self, address: &str) -> CompositeReport {
        let (threat, sanction, approval, exposure, contract) = tokio::join!(
            self.provider.threat_risks(address),
            self.provider.sanction_checks(address),
            self.provider.approval_risks(address),
            self.provider.exposure_risk(address),
            self.provider.contract_risk(address),
        );

        let threat = normalize(RiskDimension::Threat, address, threat);
        let sanction = normalize(RiskDimension::Sanction, address, sanction);
        let approval = normalize(RiskDimension::Approval, address, approval);
        let exposure = normalize(RiskDimension::Exposure, address, exposure);
        let contract = normalize(RiskDimension::Contract, address, contract);

        let mut degraded = Vec::new();
        for (dimension, is_degraded) in [
            (RiskDimension::Threat, threat.is_degraded()),
            (RiskDimension::Sanction, sanction.is_degraded()),
            (RiskDimension::Approval, approval.is_degraded()),
            (RiskDimension::Exposure, exposure.is_degraded()),
            (RiskDimension::Contract, contract.is_degraded()),
        ] {
            if is_degraded {
                degraded.push(dimension);
            }
        }

        let bundle = RiskBundle {
            threat: threat.resolve(),
            sanction: sanction.resolve(),
            approval: approval.resolve(),
            exposure: exposure.resolve(),
            contract: contract.resolve(),
        };

        let overall_risk_score = self.weights.combine(&bundle);

        tracing::debug!(
            address,
            overall_risk_score,
            degraded = degraded.len(),
            "risk aggregation complete"
        );

        CompositeReport {
            threat_risks: bundle.threat,
            sanction_checks: bundle.sanction,
            approval_risks: bundle.approval,
            exposure_risk: bundle.exposure,
            contract_risk: bundle.contract,
            overall_risk_score,
            degraded,
        }
    }
}
