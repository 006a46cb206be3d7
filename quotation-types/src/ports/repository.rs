//! Quotation store port.
//!
//! This is the primary persistence port in our hexagonal architecture.
//! Adapters (SQLite, in-memory test doubles) implement this trait.

use crate::domain::Quotation;
use crate::dto::NewQuotation;
use crate::error::RepoError;

/// Append-only store of fetched quotations.
///
/// Rows are never updated or deleted; identity is the store's
/// autoincrementing id.
#[async_trait::async_trait]
pub trait QuotationRepository: Send + Sync + 'static {
    /// Appends one quotation row. The store assigns `server_timestamp`.
    async fn insert(&self, quotation: NewQuotation) -> Result<(), RepoError>;

    /// Returns the most recently stored quotations, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<Quotation>, RepoError>;
}
