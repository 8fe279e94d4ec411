//! Scalar classification for raw values

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::FieldType;
use super::value::RawValue;

// Patterns for numeric text detection
static INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());

static FLOAT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?([eE][+-]?\d+)?$").unwrap());

/// Text tokens treated as null after trimming and case folding
const NULL_TOKENS: &[&str] = &["", "null", "none", "na", "n/a"];

/// Check whether text is an optionally-signed run of digits
pub fn is_int_text(text: &str) -> bool {
    INT_REGEX.is_match(text)
}

/// Check whether text is a decimal or scientific-notation number
pub fn is_float_text(text: &str) -> bool {
    FLOAT_REGEX.is_match(text)
}

/// Check whether a value counts as null
pub fn is_null_like(value: &RawValue) -> bool {
    match value {
        RawValue::Null => true,
        RawValue::Text(s) => is_null_token(s),
        _ => false,
    }
}

fn is_null_token(text: &str) -> bool {
    let folded = text.trim().to_lowercase();
    NULL_TOKENS.contains(&folded.as_str())
}

/// Classify a raw value into one of the scalar field types.
///
/// Native values map directly; text is matched against boolean, integer and
/// float patterns in that order and falls back to `string`.
pub fn classify_value(value: &RawValue) -> FieldType {
    match value {
        RawValue::Null => FieldType::Null,
        RawValue::Bool(_) => FieldType::Bool,
        RawValue::Int(_) | RawValue::BigInt(_) => FieldType::Int,
        RawValue::Float(_) => FieldType::Float,
        RawValue::Object(_) => FieldType::Object,
        RawValue::Array(_) => FieldType::Array,
        RawValue::Text(s) => classify_text(s),
    }
}

fn classify_text(text: &str) -> FieldType {
    if is_null_token(text) {
        return FieldType::Null;
    }

    let trimmed = text.trim();
    let folded = trimmed.to_lowercase();
    if folded == "true" || folded == "false" {
        FieldType::Bool
    } else if is_int_text(trimmed) {
        FieldType::Int
    } else if is_float_text(trimmed) {
        FieldType::Float
    } else {
        FieldType::String
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> RawValue {
        RawValue::Text(s.to_string())
    }

    #[test]
    fn test_null_tokens() {
        for token in ["", "   ", "null", "NULL", " None ", "na", "N/A", "n/a"] {
            assert_eq!(classify_value(&text(token)), FieldType::Null, "{token:?}");
            assert!(is_null_like(&text(token)));
        }
        assert_eq!(classify_value(&RawValue::Null), FieldType::Null);
        assert!(!is_null_like(&text("nan")));
    }

    #[test]
    fn test_native_values() {
        assert_eq!(classify_value(&RawValue::Bool(false)), FieldType::Bool);
        assert_eq!(classify_value(&RawValue::Int(3)), FieldType::Int);
        assert_eq!(
            classify_value(&RawValue::BigInt("9".repeat(50))),
            FieldType::Int
        );
        assert_eq!(classify_value(&RawValue::Float(0.5)), FieldType::Float);
        assert_eq!(
            classify_value(&RawValue::from(json!({"k": "v"}))),
            FieldType::Object
        );
        assert_eq!(classify_value(&RawValue::from(json!([]))), FieldType::Array);
    }

    #[test]
    fn test_text_booleans() {
        assert_eq!(classify_value(&text("true")), FieldType::Bool);
        assert_eq!(classify_value(&text(" FALSE ")), FieldType::Bool);
        assert_eq!(classify_value(&text("yes")), FieldType::String);
    }

    #[test]
    fn test_text_numbers() {
        assert_eq!(classify_value(&text("42")), FieldType::Int);
        assert_eq!(classify_value(&text("-7")), FieldType::Int);
        assert_eq!(classify_value(&text(" +12 ")), FieldType::Int);
        assert_eq!(classify_value(&text("3.14")), FieldType::Float);
        assert_eq!(classify_value(&text("1e10")), FieldType::Float);
        assert_eq!(classify_value(&text("-2.5E-3")), FieldType::Float);
        assert_eq!(classify_value(&text(".5")), FieldType::String);
        assert_eq!(classify_value(&text("1.")), FieldType::String);
        assert_eq!(classify_value(&text("1,000")), FieldType::String);
    }

    #[test]
    fn test_pattern_helpers() {
        assert!(is_int_text("007"));
        assert!(!is_int_text("1.0"));
        assert!(is_float_text("1"));
        assert!(is_float_text("1.0e+5"));
        assert!(!is_float_text("abc"));
    }
}
