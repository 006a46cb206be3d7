//! Database row structs for the SQLite adapter.

use chrono::{NaiveDateTime, Utc};
use sqlx::FromRow;

use quotation_types::{Quotation, RepoError};

/// Quotation row from the database.
#[derive(FromRow)]
pub struct DbQuotation {
    pub id: i64,
    pub bid: String,
    pub full_response: Option<String>,
    pub api_timestamp: Option<String>,
    pub server_timestamp: String,
}

impl DbQuotation {
    pub fn into_domain(self) -> Result<Quotation, RepoError> {
        // SQLite's CURRENT_TIMESTAMP writes "YYYY-MM-DD HH:MM:SS" in UTC.
        let server_timestamp =
            NaiveDateTime::parse_from_str(&self.server_timestamp, "%Y-%m-%d %H:%M:%S")
                .map(|naive| naive.and_utc())
                .or_else(|_| {
                    chrono::DateTime::parse_from_rfc3339(&self.server_timestamp)
                        .map(|dt| dt.with_timezone(&Utc))
                })
                .map_err(|e| {
                    RepoError::Database(format!(
                        "invalid server_timestamp '{}': {e}",
                        self.server_timestamp
                    ))
                })?;

        Ok(Quotation {
            id: self.id,
            bid: self.bid,
            full_response: self.full_response.unwrap_or_default(),
            api_timestamp: self.api_timestamp.unwrap_or_default(),
            server_timestamp,
        })
    }
}
