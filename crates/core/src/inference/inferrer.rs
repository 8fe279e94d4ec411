//! Schema inference engine

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::classify::classify_value;
use super::config::InferenceConfig;
use super::merge::merge_types;
use super::types::{DatasetSchema, FieldSchema, FieldType};
use super::value::Record;
use crate::sources::{SourceError, SourceFormat, read_rows};

/// Statistics from schema inference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Total records consumed
    pub records_processed: usize,
    /// Records offered after the row cap was reached
    pub records_ignored: usize,
    /// Total fields discovered
    pub fields_discovered: usize,
    /// Count of each classified type per field
    pub type_distribution: BTreeMap<String, BTreeMap<String, usize>>,
}

/// Running observations for a single field
#[derive(Debug, Clone, Default)]
struct FieldAccumulator {
    type_counts: BTreeMap<FieldType, usize>,
    present: usize,
    nullable: bool,
    examples: Vec<String>,
}

/// Schema inference engine
///
/// Consumes records one at a time and builds a [`DatasetSchema`]. Records
/// offered after `max_rows` have been consumed are ignored.
pub struct SchemaInferrer {
    config: InferenceConfig,
    format: SourceFormat,
    fields: HashMap<String, FieldAccumulator>,
    record_count: usize,
    ignored_count: usize,
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default configuration
    pub fn new(format: SourceFormat) -> Self {
        Self::with_config(format, InferenceConfig::default())
    }

    /// Create a new schema inferrer with custom configuration
    pub fn with_config(format: SourceFormat, config: InferenceConfig) -> Self {
        Self {
            config,
            format,
            fields: HashMap::new(),
            record_count: 0,
            ignored_count: 0,
        }
    }

    /// True once the row cap has been reached
    pub fn is_full(&self) -> bool {
        self.record_count >= self.config.max_rows
    }

    /// Add a single record for analysis.
    ///
    /// Returns `false` when the record was ignored because the row cap was
    /// already reached.
    pub fn add_record(&mut self, record: &Record) -> bool {
        if self.is_full() {
            self.ignored_count += 1;
            return false;
        }

        self.record_count += 1;

        for (key, value) in record {
            let field = self.fields.entry(key.clone()).or_default();
            field.present += 1;

            let field_type = classify_value(value);
            *field.type_counts.entry(field_type).or_insert(0) += 1;

            if field_type == FieldType::Null {
                field.nullable = true;
            } else if field.examples.len() < self.config.max_examples {
                field
                    .examples
                    .push(truncate_chars(&value.render(), self.config.example_max_chars));
            }
        }

        true
    }

    /// Finalize inference and generate the schema
    pub fn finalize(self) -> DatasetSchema {
        let sampled_rows = self.record_count;

        let fields = self.fields.into_iter().map(|(name, acc)| {
            let presence = if sampled_rows > 0 {
                acc.present as f64 / sampled_rows as f64
            } else {
                0.0
            };
            let observed: BTreeSet<FieldType> = acc.type_counts.keys().copied().collect();
            FieldSchema {
                name,
                field_type: merge_types(&observed),
                nullable: acc.nullable,
                examples: acc.examples,
                presence,
            }
        });

        DatasetSchema::from_fields(self.format, sampled_rows, fields)
    }

    /// Get current inference statistics
    pub fn stats(&self) -> InferenceStats {
        let type_distribution = self
            .fields
            .iter()
            .map(|(name, acc)| {
                let dist = acc
                    .type_counts
                    .iter()
                    .map(|(t, count)| (t.type_name().to_string(), *count))
                    .collect();
                (name.clone(), dist)
            })
            .collect();

        InferenceStats {
            records_processed: self.record_count,
            records_ignored: self.ignored_count,
            fields_discovered: self.fields.len(),
            type_distribution,
        }
    }

    /// Get the number of records processed
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

/// Infer a schema from a record stream.
///
/// At most `config.max_rows` records are pulled from the iterator; the rest
/// of the stream is left unconsumed.
pub fn infer_schema<I>(records: I, format: SourceFormat, config: &InferenceConfig) -> DatasetSchema
where
    I: IntoIterator<Item = Record>,
{
    let mut inferrer = SchemaInferrer::with_config(format, config.clone());
    for record in records.into_iter().take(config.max_rows) {
        inferrer.add_record(&record);
    }

    tracing::debug!(
        format = %format,
        records = inferrer.record_count(),
        fields = inferrer.fields.len(),
        "Schema inferred"
    );

    inferrer.finalize()
}

/// Read a file and infer its schema
pub fn infer_schema_from_path(
    path: impl AsRef<Path>,
    config: &InferenceConfig,
) -> Result<DatasetSchema, SourceError> {
    let path = path.as_ref();
    let mut source = read_rows(path, config.max_rows)?;
    let format = source.format();
    let schema = infer_schema(source.by_ref(), format, config);

    tracing::info!(
        path = %path.display(),
        sampled_rows = schema.sampled_rows,
        fields = schema.len(),
        skipped = source.skipped(),
        "Sampled dataset"
    );

    Ok(schema)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
