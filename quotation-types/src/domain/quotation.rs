//! Quotation domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One USD-BRL quote as published by the upstream exchange-rate API.
///
/// Every field is string-typed on the wire; `bid` stays text end-to-end to
/// avoid precision loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdBrlQuote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    #[serde(rename = "create_date")]
    pub create_date: String,
}

/// Envelope wrapping the quote, keyed by the currency pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(rename = "USDBRL")]
    pub usd_brl: UsdBrlQuote,
}

/// A successfully fetched quotation: the parsed quote plus the verbatim
/// upstream response body.
///
/// The raw body is what gets forwarded to HTTP callers, byte-for-byte.
#[derive(Debug, Clone)]
pub struct FetchedQuotation {
    pub quote: UsdBrlQuote,
    pub raw: String,
}

impl FetchedQuotation {
    pub fn bid(&self) -> &str {
        &self.quote.bid
    }
}

/// A quotation row as persisted by the store. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    pub id: i64,
    pub bid: String,
    pub full_response: String,
    pub api_timestamp: String,
    /// Assigned by the store at insert time.
    pub server_timestamp: DateTime<Utc>,
}
