//! driftfence core - schema inference and drift detection for tabular samples
//!
//! Provides:
//! - Row sources for CSV, JSON and JSONL files
//! - Schema inference over a bounded sample of rows
//! - A diff engine that classifies schema drift by severity
//! - JSON, HTML and console report rendering

pub mod diff;
pub mod inference;
pub mod report;
pub mod sources;

// Re-export commonly used types
pub use diff::{Change, ChangeKind, DiffEngine, DriftReport, Severity, diff_schemas};
pub use inference::{
    DatasetSchema, FieldSchema, FieldType, InferenceConfig, SchemaInferrer, infer_schema,
    infer_schema_from_path,
};
pub use report::{DriftPayload, ReportError, render_html, render_summary, write_html, write_json};
pub use sources::{RowSource, SourceError, SourceFormat, read_rows};
