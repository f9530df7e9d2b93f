use serde::{Deserialize, Serialize};

/// One independently-scored risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskDimension {
    Threat,
    Sanction,
    Approval,
    Exposure,
    Contract,
}

impl std::fmt::Display for RiskDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskDimension::Threat => write!(f, "threat"),
            RiskDimension::Sanction => write!(f, "sanction"),
            RiskDimension::Approval => write!(f, "approval"),
            RiskDimension::Exposure => write!(f, "exposure"),
            RiskDimension::Contract => write!(f, "contract"),
        }
    }
}

/// Severity of a provider finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A single threat finding reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatDetail {
    pub category: String,
    pub description: String,
    pub severity: Severity,
}

/// Threat-intelligence result for an address.
///
/// The `Default` value is the documented zero-risk fallback used when the
/// provider is unreachable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatResult {
    pub risk_score: f64,
    pub flags: Vec<String>,
    pub details: Vec<ThreatDetail>,
}

/// A single sanctions-list hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanctionDetail {
    pub source: String,
    pub reason: String,
    pub date: String,
}

/// Sanctions screening result for an address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanctionResult {
    pub is_sanctioned: bool,
    pub details: Vec<SanctionDetail>,
}

/// A token approval granted by the address, with the spender's risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub spender: String,
    pub risk_score: f64,
    pub flags: Vec<String>,
}

/// Token-approval risk result for an address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApprovalResult {
    pub approvals: Vec<Approval>,
}

/// A counterparty the address has interacted with, and its risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskExposure {
    pub address: String,
    pub risk_score: f64,
    #[serde(rename = "type")]
    pub exposure_type: String,
}

/// Counterparty-exposure result for an address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureResult {
    pub exposure_score: f64,
    pub risk_exposures: Vec<RiskExposure>,
}

/// A grouped set of findings from contract analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractFinding {
    pub category: String,
    pub findings: Vec<String>,
    pub severity: Severity,
}

/// Smart-contract risk result for an address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractResult {
    pub risk_score: f64,
    pub flags: Vec<String>,
    pub analysis: Vec<ContractFinding>,
}

/// Complete risk analysis for one address: all five dimension results plus
/// the weighted composite score.
///
/// Every dimension field is always populated — a failed provider call
/// degrades its field to the zero-risk default and records the dimension in
/// `degraded`, so "provider unreachable" stays distinguishable from
/// "verified safe".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeReport {
    pub threat_risks: ThreatResult,
    pub sanction_checks: SanctionResult,
    pub approval_risks: ApprovalResult,
    pub exposure_risk: ExposureResult,
    pub contract_risk: ContractResult,
    /// Weighted composite score, always clamped to [0, 1].
    pub overall_risk_score: f64,
    /// Dimensions whose provider was unreachable and whose field holds the
    /// zero-risk default.
    pub degraded: Vec<RiskDimension>,
}
