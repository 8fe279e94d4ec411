//! Error types for report writing

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// Output file or directory could not be written
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload could not be serialized
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
