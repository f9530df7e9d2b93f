use serde::Deserialize;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Webacy API key used for all risk-dimension calls
    pub webacy_api_key: String,

    /// Webacy API base URL (default: https://api.webacy.com/v1)
    pub webacy_api_url: String,

    /// Port the API server listens on (default: 3001)
    pub port: u16,

    /// Production frontend origin, appended to the CORS allow-list
    pub frontend_url: Option<String>,

    /// Uniform timeout applied to every provider call, in seconds (default: 30)
    pub provider_timeout_secs: u64,

    /// Requests allowed per rate-limit window (default: 100)
    pub rate_limit_max_requests: u64,

    /// Rate-limit window length in seconds (default: 900)
    pub rate_limit_window_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            webacy_api_key: std::env::var("WEBACY_API_KEY")
                .map_err(|_| anyhow::anyhow!("WEBACY_API_KEY environment variable is required"))?,
            webacy_api_url: std::env::var("WEBACY_API_URL")
                .unwrap_or_else(|_| "https://api.webacy.com/v1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid u16"))?,
            frontend_url: std::env::var("FRONTEND_URL").ok(),
            provider_timeout_secs: std::env::var("PROVIDER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PROVIDER_TIMEOUT_SECS must be a valid u64"))?,
            rate_limit_max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_MAX_REQUESTS must be a valid u64"))?,
            rate_limit_window_secs: std::env::var("RATE_LIMIT_WINDOW_SECS")
                .unwrap_or_else(|_| "900".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_WINDOW_SECS must be a valid u64"))?,
        })
    }

    /// Origins allowed to call the API from a browser.
    ///
    /// Always includes the local dev servers; `FRONTEND_URL` extends the list
    /// for production deployments.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![
            "http://localhost:5173".to_string(),
            "http://localhost:3000".to_string(),
        ];
        if let Some(url) = &self.frontend_url {
            origins.push(url.clone());
        }
        origins
    }
}
