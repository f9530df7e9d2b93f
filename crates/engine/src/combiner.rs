//! Composite score computation.
//!
//! Pure and deterministic: a fixed-shape bundle of per-dimension results maps
//! to one scalar in [0, 1] via fixed weights.

use probe_common::types::{
    ApprovalResult, ContractResult, ExposureResult, SanctionResult, ThreatResult,
};

/// The five normalized dimension results the combiner consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskBundle {
    pub threat: ThreatResult,
    pub sanction: SanctionResult,
    pub approval: ApprovalResult,
    pub exposure: ExposureResult,
    pub contract: ContractResult,
}

/// Per-dimension weights for the composite score.
///
/// The weights must sum to 1.0; [`RiskWeights::validate`] enforces this and
/// is called at service startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWeights {
    pub threat: f64,
    pub sanction: f64,
    pub approval: f64,
    pub exposure: f64,
    pub contract: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            threat: 0.30,
            sanction: 0.20,
            approval: 0.15,
            exposure: 0.20,
            contract: 0.15,
        }
    }
}

impl RiskWeights {
    /// Check that every weight is non-negative and the sum is 1.0
    /// (within f64 tolerance).
    pub fn validate(&self) -> anyhow::Result<()> {
        let weights = [
            self.threat,
            self.sanction,
            self.approval,
            self.exposure,
            self.contract,
        ];

        if weights.iter().any(|w| *w < 0.0) {
            anyhow::bail!("risk weights must be non-negative: {:?}", self);
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            anyhow::bail!("risk weights must sum to 1.0, got {}", sum);
        }

        Ok(())
    }

    /// Combine a bundle of dimension results into one score, clamped to [0, 1].
    ///
    /// Sanction status contributes as a step (1 if sanctioned, else 0). An
    /// empty approvals list contributes exactly 0, never NaN: an address with
    /// no recorded approvals carries no approval risk.
    pub fn combine(&self, bundle: &RiskBundle) -> f64 {
        let approval_mean = if bundle.approval.approvals.is_empty() {
            0.0
        } else {
            let total: f64 = bundle.approval.approvals.iter().map(|a| a.risk_score).sum();
            total / bundle.approval.approvals.len() as f64
        };

        let score = self.threat * bundle.threat.risk_score
            + self.sanction * if bundle.sanction.is_sanctioned { 1.0 } else { 0.0 }
            + self.approval * approval_mean
            + self.exposure * bundle.exposure.exposure_score
            + self.contract * bundle.contract.risk_score;

        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe_common::types::Approval;

    fn approval(risk_score: f64) -> Approval {
        Approval {
            spender: "spender".to_string(),
            risk_score,
            flags: vec![],
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        RiskWeights::default().validate().unwrap();
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = RiskWeights {
            threat: -0.1,
            sanction: 0.4,
            approval: 0.15,
            exposure: 0.2,
            contract: 0.35,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let weights = RiskWeights {
            threat: 0.5,
            ..RiskWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_all_defaults_score_zero() {
        let score = RiskWeights::default().combine(&RiskBundle::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_max_threat_alone_scores_its_weight() {
        let bundle = RiskBundle {
            threat: ThreatResult {
                risk_score: 1.0,
                flags: vec![],
                details: vec![],
            },
            ..RiskBundle::default()
        };

        let score = RiskWeights::default().combine(&bundle);
        assert!((score - 0.30).abs() < 1e-12);
    }

    #[test]
    fn test_empty_approvals_contribute_zero() {
        let bundle = RiskBundle {
            sanction: SanctionResult {
                is_sanctioned: true,
                details: vec![],
            },
            approval: ApprovalResult { approvals: vec![] },
            ..RiskBundle::default()
        };

        let score = RiskWeights::default().combine(&bundle);
        assert!(score.is_finite());
        assert!((score - 0.20).abs() < 1e-12);
    }

    #[test]
    fn test_worked_scenario() {
        let bundle = RiskBundle {
            threat: ThreatResult {
                risk_score: 0.5,
                flags: vec![],
                details: vec![],
            },
            sanction: SanctionResult {
                is_sanctioned: true,
                details: vec![],
            },
            approval: ApprovalResult {
                approvals: vec![approval(0.4), approval(0.6)],
            },
            exposure: ExposureResult {
                exposure_score: 0.2,
                risk_exposures: vec![],
            },
            contract: ContractResult {
                risk_score: 0.8,
                flags: vec![],
                analysis: vec![],
            },
        };

        // 0.30*0.5 + 0.20*1 + 0.15*0.5 + 0.20*0.2 + 0.15*0.8
        let score = RiskWeights::default().combine(&bundle);
        assert!((score - 0.585).abs() < 1e-12);
    }

    #[test]
    fn test_combine_is_deterministic() {
        let bundle = RiskBundle {
            threat: ThreatResult {
                risk_score: 0.33,
                flags: vec![],
                details: vec![],
            },
            approval: ApprovalResult {
                approvals: vec![approval(0.7)],
            },
            ..RiskBundle::default()
        };

        let weights = RiskWeights::default();
        let first = weights.combine(&bundle);
        for _ in 0..10 {
            assert_eq!(weights.combine(&bundle), first);
        }
    }

    #[test]
    fn test_score_clamped_to_unit_interval() {
        // Out-of-range provider scores must not escape the clamp.
        let hot = RiskBundle {
            threat: ThreatResult {
                risk_score: 5.0,
                flags: vec![],
                details: vec![],
            },
            exposure: ExposureResult {
                exposure_score: 3.0,
                risk_exposures: vec![],
            },
            contract: ContractResult {
                risk_score: 4.0,
                flags: vec![],
                analysis: vec![],
            },
            ..RiskBundle::default()
        };
        assert_eq!(RiskWeights::default().combine(&hot), 1.0);

        let cold = RiskBundle {
            threat: ThreatResult {
                risk_score: -5.0,
                flags: vec![],
                details: vec![],
            },
            ..RiskBundle::default()
        };
        assert_eq!(RiskWeights::default().combine(&cold), 0.0);
    }
}
