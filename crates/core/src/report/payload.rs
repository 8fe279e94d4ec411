//! Serializable drift report payload

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diff::{Change, DriftReport};
use crate::inference::{DatasetSchema, FieldType};
use crate::sources::SourceFormat;

/// Top-level report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftPayload {
    pub summary: PayloadSummary,
    pub changes: Vec<Change>,
    pub before: SchemaPayload,
    pub after: SchemaPayload,
    pub generated_at: DateTime<Utc>,
}

/// Headline numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadSummary {
    pub breaking: bool,
    pub risk_score: u32,
    pub change_count: usize,
}

/// One side of the comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaPayload {
    pub format: SourceFormat,
    pub sampled_rows: usize,
    pub fields: BTreeMap<String, FieldPayload>,
}

/// Per-field entry; presence is rounded to 4 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPayload {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub nullable: bool,
    pub presence: f64,
    pub examples: Vec<String>,
}

impl DriftPayload {
    /// Build the payload for a finished comparison
    pub fn new(before: &DatasetSchema, after: &DatasetSchema, report: &DriftReport) -> Self {
        Self {
            summary: PayloadSummary {
                breaking: report.breaking,
                risk_score: report.risk_score,
                change_count: report.change_count(),
            },
            changes: report.changes.clone(),
            before: SchemaPayload::from(before),
            after: SchemaPayload::from(after),
            generated_at: Utc::now(),
        }
    }
}

impl From<&DatasetSchema> for SchemaPayload {
    fn from(schema: &DatasetSchema) -> Self {
        Self {
            format: schema.format,
            sampled_rows: schema.sampled_rows,
            fields: schema
                .fields
                .iter()
                .map(|(name, field)| {
                    (
                        name.clone(),
                        FieldPayload {
                            field_type: field.field_type,
                            nullable: field.nullable,
                            presence: round_to(field.presence, 4),
                            examples: field.examples.clone(),
                        },
                    )
                })
                .collect(),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
