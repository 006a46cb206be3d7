//! Quotation Application Service
//!
//! Orchestrates the fetch-then-store pipeline through the provider and
//! repository ports. Contains NO infrastructure logic.

use std::time::Duration;

use tokio::time::timeout;

use quotation_types::{
    FetchError, FetchedQuotation, NewQuotation, QuotationRepository, RateProvider, StoreError,
};

/// Deadline for the upstream fetch stage.
pub const DEFAULT_FETCH_BUDGET: Duration = Duration::from_millis(200);

/// Deadline for the store stage. A fresh budget, not the fetch stage's
/// remaining time.
pub const DEFAULT_STORE_BUDGET: Duration = Duration::from_millis(10);

/// Application service for quotation requests.
///
/// Generic over the two ports - adapters are injected at compile time.
/// This enables:
/// - Swapping the store or the upstream source without code changes
/// - Testing with in-process ports
pub struct QuotationService<R: QuotationRepository, P: RateProvider> {
    repo: R,
    provider: P,
    fetch_budget: Duration,
    store_budget: Duration,
}

impl<R: QuotationRepository, P: RateProvider> QuotationService<R, P> {
    /// Creates a new service with the default stage budgets.
    pub fn new(repo: R, provider: P) -> Self {
        Self {
            repo,
            provider,
            fetch_budget: DEFAULT_FETCH_BUDGET,
            store_budget: DEFAULT_STORE_BUDGET,
        }
    }

    /// Creates a new service with custom stage budgets.
    pub fn with_budgets(
        repo: R,
        provider: P,
        fetch_budget: Duration,
        store_budget: Duration,
    ) -> Self {
        Self {
            repo,
            provider,
            fetch_budget,
            store_budget,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Fetches the latest quotation and best-effort persists it.
    ///
    /// The two stages run sequentially, each under its own deadline. A store
    /// failure is logged and swallowed: the fetched quotation is returned to
    /// the caller regardless of the persistence outcome.
    pub async fn fetch_and_store(&self) -> Result<FetchedQuotation, FetchError> {
        let fetched = self.fetch().await?;

        if let Err(err) = self.store(&fetched).await {
            tracing::warn!("failed to persist quotation, response not affected: {err}");
        }

        Ok(fetched)
    }

    async fn fetch(&self) -> Result<FetchedQuotation, FetchError> {
        let fetched = timeout(self.fetch_budget, self.provider.latest_usd_brl())
            .await
            .map_err(|_| FetchError::Timeout(self.fetch_budget))??;

        tracing::info!(bid = %fetched.quote.bid, "quotation received from upstream");
        Ok(fetched)
    }

    async fn store(&self, fetched: &FetchedQuotation) -> Result<(), StoreError> {
        let row = NewQuotation::from(fetched);

        timeout(self.store_budget, self.repo.insert(row))
            .await
            .map_err(|_| StoreError::Timeout(self.store_budget))??;

        tracing::info!(bid = %fetched.quote.bid, "quotation persisted");
        Ok(())
    }
}
