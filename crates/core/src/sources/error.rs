//! Error types for row sources

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort reading a source
#[derive(Error, Debug)]
pub enum SourceError {
    /// File could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The top-level JSON document is malformed
    #[error("Invalid JSON document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The CSV header row could not be read
    #[error("Invalid CSV header in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },
}
