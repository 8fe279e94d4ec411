//! JSON document and JSONL readers

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Split};
use std::path::Path;

use serde_json::Value;

use super::error::SourceError;
use super::{RowOutcome, RowReader};
use crate::inference::record_from_json;

/// Newline-delimited JSON, one object per line.
///
/// Lines are read as raw bytes so that a line with invalid UTF-8 is skipped
/// like any other malformed line instead of ending the stream.
pub(crate) struct JsonlReader {
    lines: Split<BufReader<File>>,
    line_number: usize,
}

impl JsonlReader {
    pub(crate) fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            lines: BufReader::new(file).split(b'\n'),
            line_number: 0,
        })
    }
}

impl RowReader for JsonlReader {
    fn next_row(&mut self) -> Option<RowOutcome> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(
                        line = self.line_number + 1,
                        error = %e,
                        "Stopped reading JSONL source"
                    );
                    return None;
                }
            };
            self.line_number += 1;

            let trimmed = line.trim_ascii();
            // Skip empty lines
            if trimmed.is_empty() {
                continue;
            }

            return Some(match serde_json::from_slice::<Value>(trimmed) {
                Ok(Value::Object(map)) => RowOutcome::Record(record_from_json(map)),
                Ok(other) => RowOutcome::Skipped(format!(
                    "line {}: expected object, found {}",
                    self.line_number,
                    value_type_name(&other)
                )),
                Err(e) => RowOutcome::Skipped(format!("line {}: {}", self.line_number, e)),
            });
        }
    }
}

/// A single JSON document: an array of objects or an object of objects
pub(crate) struct JsonDocumentReader {
    items: std::vec::IntoIter<Value>,
    index: usize,
}

impl JsonDocumentReader {
    pub(crate) fn open(path: &Path) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Value = serde_json::from_str(&content).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        let items = match document {
            Value::Array(items) => items,
            Value::Object(map) => map.into_iter().map(|(_, value)| value).collect(),
            other => {
                tracing::warn!(
                    path = %path.display(),
                    found = value_type_name(&other),
                    "JSON document holds no records"
                );
                Vec::new()
            }
        };

        Ok(Self {
            items: items.into_iter(),
            index: 0,
        })
    }
}

impl RowReader for JsonDocumentReader {
    fn next_row(&mut self) -> Option<RowOutcome> {
        let item = self.items.next()?;
        let index = self.index;
        self.index += 1;

        Some(match item {
            Value::Object(map) => RowOutcome::Record(record_from_json(map)),
            other => RowOutcome::Skipped(format!(
                "item {}: expected object, found {}",
                index,
                value_type_name(&other)
            )),
        })
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
