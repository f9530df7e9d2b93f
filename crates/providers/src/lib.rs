//! Risk-provider clients.
//!
//! Each risk dimension is served by one outbound request/response operation
//! against an external scoring service. The [`RiskProvider`] trait is the seam
//! the aggregation engine consumes; [`webacy::WebacyClient`] is the production
//! implementation.

pub mod error;
pub mod webacy;

pub use error::ProviderError;
pub use webacy::WebacyClient;

use std::future::Future;

use probe_common::types::{
    ApprovalResult, ContractResult, ExposureResult, SanctionResult, ThreatResult,
};

/// One request/response operation per risk dimension.
///
/// Every call is a single outbound request with no retries; callers decide
/// how to handle a [`ProviderError`]. Methods return `Send` futures so the
/// engine can fan them out from multi-threaded runtime tasks.
pub trait RiskProvider: Send + Sync {
    /// Query threat-intelligence findings for an address.
    fn threat_risks(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<ThreatResult, ProviderError>> + Send;

    /// Screen an address against sanctions lists.
    fn sanction_checks(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<SanctionResult, ProviderError>> + Send;

    /// Query risky token approvals granted by an address.
    fn approval_risks(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<ApprovalResult, ProviderError>> + Send;

    /// Query counterparty exposure for an address.
    fn exposure_risk(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<ExposureResult, ProviderError>> + Send;

    /// Query smart-contract risk for an address.
    fn contract_risk(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<ContractResult, ProviderError>> + Send;
}
