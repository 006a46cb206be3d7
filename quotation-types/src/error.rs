//! Error types for the quotation service.

use std::time::Duration;

/// Upstream fetch errors (server -> external API stage).
///
/// Any of these aborts the request handler with a 500 response.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    #[error("upstream returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("upstream payload could not be decoded: {0}")]
    Malformed(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Database(String),
}

/// Store-stage errors as seen by the service.
///
/// Always non-fatal to the caller-facing response: logged and swallowed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store write timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Write(#[from] RepoError),
}
