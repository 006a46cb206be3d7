//! # Quotation Client SDK
//!
//! A typed Rust client for the quotation server, plus the output-file
//! writer used by the CLI.

pub mod output;

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::time::timeout;

/// Total deadline for one quotation request: connect, response and body
/// read all share this single budget. Independent of the server's internal
/// stage budgets, which may legitimately exceed it.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(300);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request timed out after {0:?}")]
    RequestTimeout(Duration),

    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("server returned status {status}: {body}")]
    BadServerStatus { status: u16, body: String },

    #[error("response payload could not be decoded: {0}")]
    BadPayload(#[from] serde_json::Error),

    #[error("'bid' field missing or empty in server response")]
    MissingBidField,

    #[error("failed to write quotation to '{path}': {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },
}

/// Narrow view of the server response; only the bid is extracted.
#[derive(Debug, Default, Deserialize)]
struct ServerEnvelope {
    #[serde(rename = "USDBRL", default)]
    usd_brl: ServerQuote,
}

#[derive(Debug, Default, Deserialize)]
struct ServerQuote {
    #[serde(default)]
    bid: String,
}

fn extract_bid(body: &str) -> Result<String, ClientError> {
    let envelope: ServerEnvelope = serde_json::from_str(body)?;
    if envelope.usd_brl.bid.is_empty() {
        return Err(ClientError::MissingBidField);
    }
    Ok(envelope.usd_brl.bid)
}

/// Quotation API client.
pub struct QuotationClient {
    base_url: String,
    request_timeout: Duration,
    http: Client,
}

impl QuotationClient {
    /// Creates a new client with the default request deadline.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Sets a custom request deadline.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Fetches the current USD-BRL bid from the server.
    pub async fn fetch_bid(&self) -> Result<String, ClientError> {
        timeout(self.request_timeout, self.fetch_bid_inner())
            .await
            .map_err(|_| ClientError::RequestTimeout(self.request_timeout))?
    }

    async fn fetch_bid_inner(&self) -> Result<String, ClientError> {
        let url = format!("{}/cotacao", self.base_url);
        tracing::info!("requesting quotation from {url}");

        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::BadServerStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let bid = extract_bid(&body)?;

        tracing::info!(bid = %bid, "quotation received");
        Ok(bid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = QuotationClient::new("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = QuotationClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_timeout() {
        let client = QuotationClient::new("http://localhost:8080")
            .with_request_timeout(Duration::from_secs(2));
        assert_eq!(client.request_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_extract_bid() {
        let bid = extract_bid(r#"{"USDBRL":{"bid":"5.25","ask":"5.26"}}"#).unwrap();
        assert_eq!(bid, "5.25");
    }

    #[test]
    fn test_extract_bid_missing_field() {
        let err = extract_bid(r#"{"USDBRL":{"ask":"5.26"}}"#).unwrap_err();
        assert!(matches!(err, ClientError::MissingBidField));
    }

    #[test]
    fn test_extract_bid_empty_field() {
        let err = extract_bid(r#"{"USDBRL":{"bid":""}}"#).unwrap_err();
        assert!(matches!(err, ClientError::MissingBidField));
    }

    #[test]
    fn test_extract_bid_missing_envelope() {
        let err = extract_bid("{}").unwrap_err();
        assert!(matches!(err, ClientError::MissingBidField));
    }

    #[test]
    fn test_extract_bid_undecodable_body() {
        let err = extract_bid("<html>gateway error</html>").unwrap_err();
        assert!(matches!(err, ClientError::BadPayload(_)));
    }
}
