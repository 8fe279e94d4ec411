//! Row sources for CSV, JSON and JSONL files
//!
//! A source is opened from a path and yields [`Record`]s lazily, stopping at
//! the row cap. Records that cannot be used (a JSONL line that is not an
//! object, a malformed CSV row) are skipped and counted; only failures that
//! make the whole file unreadable surface as [`SourceError`].

mod delimited;
mod error;
mod json;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::inference::Record;

pub use error::SourceError;

/// File format, chosen from the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Csv,
    Json,
    Jsonl,
}

impl SourceFormat {
    /// Pick the format from a path's file name.
    ///
    /// `.jsonl` and `.json` are matched case-insensitively; anything else is
    /// read as CSV.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.ends_with(".jsonl") {
            SourceFormat::Jsonl
        } else if name.ends_with(".json") {
            SourceFormat::Json
        } else {
            SourceFormat::Csv
        }
    }

    /// Format name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Json => "json",
            SourceFormat::Jsonl => "jsonl",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of pulling one row from a reader
pub(crate) enum RowOutcome {
    Record(Record),
    Skipped(String),
}

/// Format-specific reader behind a [`RowSource`]
pub(crate) trait RowReader {
    /// Next row, or `None` once the input is exhausted
    fn next_row(&mut self) -> Option<RowOutcome>;
}

/// Lazy, bounded stream of records from one file
pub struct RowSource {
    format: SourceFormat,
    reader: Box<dyn RowReader>,
    remaining: usize,
    skipped: usize,
}

impl RowSource {
    /// Detected format
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Number of rows skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for RowSource {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            match self.reader.next_row()? {
                RowOutcome::Record(record) => {
                    self.remaining -= 1;
                    return Some(record);
                }
                RowOutcome::Skipped(reason) => {
                    self.skipped += 1;
                    tracing::debug!(format = %self.format, %reason, "Skipped record");
                }
            }
        }
    }
}

impl fmt::Debug for RowSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSource")
            .field("format", &self.format)
            .field("remaining", &self.remaining)
            .field("skipped", &self.skipped)
            .finish()
    }
}

/// Open a file as a record stream of at most `max_rows` records
pub fn read_rows(path: impl AsRef<Path>, max_rows: usize) -> Result<RowSource, SourceError> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path);

    let reader: Box<dyn RowReader> = match format {
        SourceFormat::Jsonl => Box::new(json::JsonlReader::open(path)?),
        SourceFormat::Json => Box::new(json::JsonDocumentReader::open(path)?),
        SourceFormat::Csv => Box::new(delimited::CsvReader::open(path)?),
    };

    Ok(RowSource {
        format,
        reader,
        remaining: max_rows,
        skipped: 0,
    })
}
