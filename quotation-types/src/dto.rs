//! Data Transfer Objects for the store boundary.

use serde::{Deserialize, Serialize};

use crate::domain::FetchedQuotation;

/// Insert payload for one quotation row.
///
/// `server_timestamp` is assigned by the store, not the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuotation {
    pub bid: String,
    pub full_response: String,
    pub api_timestamp: String,
}

impl From<&FetchedQuotation> for NewQuotation {
    fn from(fetched: &FetchedQuotation) -> Self {
        Self {
            bid: fetched.quote.bid.clone(),
            full_response: fetched.raw.clone(),
            api_timestamp: fetched.quote.timestamp.clone(),
        }
    }
}
