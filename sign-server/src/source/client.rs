//! Arrivals API HTTP client.
//!
//! Provides the async method for querying upcoming arrivals at a stop.
//! The backend computes ETAs server-side; this client only transports
//! and decodes them.

use crate::stops::StopId;

use super::ArrivalSource;
use super::error::SourceError;
use super::types::Arrival;

/// Default base URL for the arrivals API.
///
/// Overridden in production via the `ARRIVALS_API_BASE` environment
/// variable (read in `main`).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Configuration for the arrivals client.
#[derive(Debug, Clone)]
pub struct ArrivalClientConfig {
    /// Base URL for the API (defaults to a local backend)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ArrivalClientConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ArrivalClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Arrivals API client.
///
/// One endpoint per stop: `GET {base}/stops/{stopId}/arrivals`.
#[derive(Debug, Clone)]
pub struct ArrivalClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArrivalClient {
    /// Create a new arrivals client with the given configuration.
    pub fn new(config: ArrivalClientConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl ArrivalSource for ArrivalClient {
    async fn get_arrivals_for_stop(&self, stop_id: &StopId) -> Result<Vec<Arrival>, SourceError> {
        let url = format!("{}/stops/{}/arrivals", self.base_url, stop_id);

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| SourceError::Json {
            message: e.to_string(),
        })
    }
}
