//! Inferred schema types

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sources::SourceFormat;

/// Scalar type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Null,
    Bool,
    Int,
    Float,
    String,
    Object,
    Array,
}

impl FieldType {
    /// Get the type name used in reports
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Null => "null",
            FieldType::Bool => "bool",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::String => "string",
            FieldType::Object => "object",
            FieldType::Array => "array",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One observed field across a sampled record set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name, unique within its dataset
    pub name: String,
    /// Merged type across all observed values
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// At least one observed value was null-like
    pub nullable: bool,
    /// Rendered non-null values in first-seen order
    pub examples: Vec<String>,
    /// Fraction of sampled records containing the key (0.0 - 1.0)
    pub presence: f64,
}

impl FieldSchema {
    /// Create a field with no examples
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        nullable: bool,
        presence: f64,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable,
            examples: Vec::new(),
            presence,
        }
    }

    /// Attach example values
    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }
}

/// Summary of one sampled dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSchema {
    /// Source format, derived from the file name
    pub format: SourceFormat,
    /// Fields keyed by name, iterated in ascending name order
    pub fields: BTreeMap<String, FieldSchema>,
    /// Number of records actually consumed
    pub sampled_rows: usize,
}

impl DatasetSchema {
    /// Build a schema from already-finalized fields
    pub fn from_fields(
        format: SourceFormat,
        sampled_rows: usize,
        fields: impl IntoIterator<Item = FieldSchema>,
    ) -> Self {
        Self {
            format,
            fields: fields
                .into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
            sampled_rows,
        }
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field was observed
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(FieldType::Bool.to_string(), "bool");
        assert_eq!(FieldType::Float.type_name(), "float");
    }

    #[test]
    fn test_field_type_serde() {
        let json = serde_json::to_string(&FieldType::Object).unwrap();
        assert_eq!(json, "\"object\"");
        let parsed: FieldType = serde_json::from_str("\"int\"").unwrap();
        assert_eq!(parsed, FieldType::Int);
    }

    #[test]
    fn test_from_fields_sorted() {
        let schema = DatasetSchema::from_fields(
            SourceFormat::Csv,
            4,
            vec![
                FieldSchema::new("zeta", FieldType::Int, false, 1.0),
                FieldSchema::new("alpha", FieldType::String, true, 0.5),
            ],
        );
        let names: Vec<&str> = schema.fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields["alpha"].field_type, FieldType::String);
    }

    #[test]
    fn test_field_schema_serializes_type_key() {
        let field = FieldSchema::new("id", FieldType::Int, false, 1.0);
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], "int");
        assert_eq!(value["nullable"], false);
    }
}
