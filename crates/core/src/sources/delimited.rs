//! CSV reader with header-derived field names

use std::fs::File;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use super::error::SourceError;
use super::{RowOutcome, RowReader};
use crate::inference::{RawValue, Record};

/// CSV rows keyed by the header row.
///
/// Rows shorter than the header only carry the columns they have; missing
/// trailing columns are absent from the record. Cells past the header width
/// are dropped.
pub(crate) struct CsvReader {
    headers: Vec<String>,
    rows: StringRecordsIntoIter<File>,
    row_number: usize,
}

impl CsvReader {
    pub(crate) fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|source| SourceError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Self {
            headers,
            rows: reader.into_records(),
            row_number: 0,
        })
    }

    fn to_record(&self, row: &StringRecord) -> Record {
        if row.len() > self.headers.len() {
            tracing::debug!(
                row = self.row_number,
                extra = row.len() - self.headers.len(),
                "Dropping cells past header width"
            );
        }

        self.headers
            .iter()
            .zip(row.iter())
            .map(|(key, cell)| (key.clone(), RawValue::Text(cell.to_string())))
            .collect()
    }
}

impl RowReader for CsvReader {
    fn next_row(&mut self) -> Option<RowOutcome> {
        let row = self.rows.next()?;
        self.row_number += 1;

        Some(match row {
            Ok(row) => RowOutcome::Record(self.to_record(&row)),
            Err(e) => RowOutcome::Skipped(format!("row {}: {}", self.row_number, e)),
        })
    }
}
