//! Exchange-rate provider port.
//!
//! Implementations are HTTP clients against the external pricing API, or
//! in-process stubs for tests.

use crate::domain::FetchedQuotation;
use crate::error::FetchError;

/// Port trait for the upstream USD-BRL pricing source.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the latest USD-BRL quotation.
    ///
    /// Returns the parsed quote together with the verbatim response body.
    /// The caller owns the deadline; implementations do not time out on
    /// their own.
    async fn latest_usd_brl(&self) -> Result<FetchedQuotation, FetchError>;
}
