//! Network loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading network data.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The data file could not be read
    #[error("failed to read network data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data did not match the expected line/stop shape
    #[error("malformed network data: {0}")]
    Parse(#[from] serde_json::Error),
}
