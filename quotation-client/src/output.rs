//! Output-file writer for the fetched bid.

use std::path::Path;

use crate::ClientError;

/// Writes `Dólar: <bid>` to `path`, overwriting any existing content.
pub fn write_bid_file(path: impl AsRef<Path>, bid: &str) -> Result<(), ClientError> {
    let path = path.as_ref();
    let content = format!("Dólar: {bid}");

    std::fs::write(path, &content).map_err(|source| ClientError::FileWrite {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!("quotation written to {}: {content}", path.display());
    Ok(())
}
