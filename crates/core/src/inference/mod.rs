//! Schema inference engine for sampled records
//!
//! This module turns a stream of loosely-typed records into a
//! [`DatasetSchema`]: one [`FieldSchema`] per observed field with a merged
//! type, nullability, presence ratio and a few example values.
//!
//! ## Features
//!
//! - **Scalar classification** - native JSON values and text that looks like
//!   booleans, integers or floats
//! - **Type merging** - a fixed lattice collapses every observed type into one
//! - **Presence tracking** - how often a key appears across sampled records
//! - **Example collection** - the first few non-null values per field
//!
//! ## Example
//!
//! ```rust,ignore
//! use driftfence_core::inference::{InferenceConfig, infer_schema_from_path};
//!
//! let config = InferenceConfig::builder().max_rows(1000).build();
//! let schema = infer_schema_from_path("users.jsonl", &config)?;
//! for (name, field) in &schema.fields {
//!     println!("{name}: {} (presence {:.2})", field.field_type, field.presence);
//! }
//! ```

mod classify;
mod config;
mod inferrer;
mod merge;
mod types;
mod value;

pub use classify::{classify_value, is_float_text, is_int_text, is_null_like};
pub use config::{
    DEFAULT_EXAMPLE_MAX_CHARS, DEFAULT_MAX_EXAMPLES, DEFAULT_MAX_ROWS, InferenceConfig,
    InferenceConfigBuilder,
};
pub use inferrer::{InferenceStats, SchemaInferrer, infer_schema, infer_schema_from_path};
pub use merge::merge_types;
pub use types::{DatasetSchema, FieldSchema, FieldType};
pub use value::{RawValue, Record, record_from_json};
