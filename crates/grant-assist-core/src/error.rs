//! Error types for snapshot handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for snapshot operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while reading or addressing proposal state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A section name outside the fixed set of seven was used.
    #[error("unknown proposal section: {name:?}")]
    UnknownSection { name: String },

    /// Snapshot JSON could not be parsed.
    #[error("snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
