use thiserror::Error;

/// Errors a provider call can produce.
///
/// This is the only error kind the provider layer signals; it never crosses
/// the aggregation engine's normalizer boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
