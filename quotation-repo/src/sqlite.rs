//! SQLite repository adapter.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use quotation_types::{NewQuotation, Quotation, QuotationRepository, RepoError};

use crate::types::DbQuotation;

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_quotations.sql");
        sqlx::query(ddl).execute(&pool).await?;

        tracing::info!("quotation store ready, table 'quotations' migrated");
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl QuotationRepository for SqliteRepo {
    async fn insert(&self, quotation: NewQuotation) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO quotations (bid, full_response, api_timestamp) VALUES (?, ?, ?)"#,
        )
        .bind(&quotation.bid)
        .bind(&quotation.full_response)
        .bind(&quotation.api_timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Quotation>, RepoError> {
        let rows: Vec<DbQuotation> = sqlx::query_as(
            r#"SELECT id, bid, full_response, api_timestamp, server_timestamp
               FROM quotations ORDER BY id DESC LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbQuotation::into_domain).collect()
    }
}
