//! Error types for the CLI

use driftfence_core::{ReportError, SourceError};
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Report(#[from] ReportError),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Failed to write file: {0}")]
    FileWriteError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
