//! # Quotation Repository
//!
//! Concrete store adapter for the quotation service. Implements the
//! `QuotationRepository` port on top of a local SQLite file.

pub mod sqlite;

mod types;


pub use sqlite::SqliteRepo;

/// Build and initialize a repository from a database URL.
///
/// This function:
/// 1. Connects to the database
/// 2. Runs the migration to create the quotations table
/// 3. Returns a ready-to-use `SqliteRepo`
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo("sqlite://cotacoes.db?mode=rwc").await?;
/// ```
pub async fn build_repo(database_url: &str) -> anyhow::Result<SqliteRepo> {
    SqliteRepo::new(database_url).await
}
