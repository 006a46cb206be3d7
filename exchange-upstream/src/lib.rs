//! # Exchange Upstream
//!
//! Outbound HTTP adapter for the AwesomeAPI economia exchange-rate service.
//! Implements the `RateProvider` port.

use async_trait::async_trait;
use reqwest::Client;

use quotation_types::{FetchError, FetchedQuotation, RateProvider, UpstreamEnvelope};

/// Base URL of the public AwesomeAPI economia service.
pub const AWESOME_API_BASE_URL: &str = "https://economia.awesomeapi.com.br";

/// Reqwest-based provider against the AwesomeAPI `/json/last/USD-BRL`
/// endpoint.
///
/// Imposes no deadline of its own; the service layer owns the fetch budget.
pub struct AwesomeApiProvider {
    base_url: String,
    http: Client,
}

impl AwesomeApiProvider {
    /// Creates a provider against the public AwesomeAPI service.
    pub fn new() -> Self {
        Self::with_base_url(AWESOME_API_BASE_URL)
    }

    /// Creates a provider against a custom base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }
}

impl Default for AwesomeApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for AwesomeApiProvider {
    async fn latest_usd_brl(&self) -> Result<FetchedQuotation, FetchError> {
        let url = format!("{}/json/last/USD-BRL", self.base_url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let raw = resp
            .text()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        let envelope: UpstreamEnvelope =
            serde_json::from_str(&raw).map_err(|e| FetchError::Malformed(e.to_string()))?;

        tracing::debug!(bid = %envelope.usd_brl.bid, "upstream quotation decoded");
        Ok(FetchedQuotation {
            quote: envelope.usd_brl,
            raw,
        })
    }
}
