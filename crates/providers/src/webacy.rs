//! Webacy threat-intelligence client.
//!
//! All five risk dimensions are served by the same provider: each is a POST
//! of `{ "address": ... }` to its own endpoint under the configured base URL,
//! authenticated with a bearer API key.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde_json::json;

use probe_common::types::{
    ApprovalResult, ContractResult, ExposureResult, SanctionResult, ThreatResult,
};

use crate::RiskProvider;
use crate::error::ProviderError;

/// HTTP client for the Webacy risk API.
#[derive(Debug, Clone)]
pub struct WebacyClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WebacyClient {
    /// Build a client with a uniform per-request timeout.
    ///
    /// The timeout is the only transport tuning applied; individual calls
    /// cannot override it.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// POST `{ "address": ... }` to an endpoint and deserialize the response.
    ///
    /// Fails on transport errors, non-2xx statuses, and bodies that do not
    /// match the expected shape. No retries.
    async fn post_address<T: DeserializeOwned>(
        &self,
        path: &str,
        address: &str,
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .json(&json!({ "address": address }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl RiskProvider for WebacyClient {
    async fn threat_risks(&self, address: &str) -> Result<ThreatResult, ProviderError> {
        self.post_address("/threat_risks", address).await
    }

    async fn sanction_checks(&self, address: &str) -> Result<SanctionResult, ProviderError> {
        self.post_address("/sanction_checks", address).await
    }

    async fn approval_risks(&self, address: &str) -> Result<ApprovalResult, ProviderError> {
        self.post_address("/approval_risks", address).await
    }

    async fn exposure_risk(&self, address: &str) -> Result<ExposureResult, ProviderError> {
        self.post_address("/exposure_risk", address).await
    }

    async fn contract_risk(&self, address: &str) -> Result<ContractResult, ProviderError> {
        self.post_address("/contract_risk", address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe_common::types::Severity;

    #[test]
    fn test_client_normalizes_trailing_slash() {
        let client =
            WebacyClient::new("https://api.webacy.com/v1/", "key", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url, "https://api.webacy.com/v1");
    }

    #[test]
    fn test_sanction_payload_deserializes() {
        let body = r#"{
            "isSanctioned": true,
            "details": [
                { "source": "OFAC", "reason": "SDN list match", "date": "2023-08-08" }
            ]
        }"#;

        let parsed: SanctionResult = serde_json::from_str(body).unwrap();
        assert!(parsed.is_sanctioned);
        assert_eq!(parsed.details[0].source, "OFAC");
    }

    #[test]
    fn test_approval_payload_deserializes() {
        let body = r#"{
            "approvals": [
                { "spender": "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin", "riskScore": 0.4, "flags": ["unlimited_allowance"] }
            ]
        }"#;

        let parsed: ApprovalResult = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.approvals.len(), 1);
        assert_eq!(parsed.approvals[0].risk_score, 0.4);
    }

    #[test]
    fn test_contract_payload_deserializes() {
        let body = r#"{
            "riskScore": 0.8,
            "flags": ["upgradeable"],
            "analysis": [
                { "category": "ownership", "findings": ["owner can mint"], "severity": "medium" }
            ]
        }"#;

        let parsed: ContractResult = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.risk_score, 0.8);
        assert_eq!(parsed.analysis[0].severity, Severity::Medium);
    }

    #[test]
    fn test_exposure_payload_rejects_wrong_shape() {
        // A provider handing back an error object instead of the result shape
        // must surface as a deserialization failure, not a zeroed struct.
        let body = r#"{ "error": "rate limited" }"#;
        assert!(serde_json::from_str::<ExposureResult>(body).is_err());
    }
}
