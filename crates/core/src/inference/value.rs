//! Raw record values as produced by row sources

use std::collections::BTreeMap;

use serde_json::{Number, Value};

use super::classify::is_int_text;

/// A single sampled record: field name to raw value.
///
/// A key that is missing from the map was not observed in the record. A key
/// mapped to [`RawValue::Null`] was observed with a null value.
pub type Record = BTreeMap<String, RawValue>;

/// Loosely-typed value read from a source.
///
/// JSON sources produce native variants; CSV sources only ever produce
/// [`RawValue::Text`]. Text is classified further by pattern during inference.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Explicit null / absence marker
    Null,
    /// Native boolean
    Bool(bool),
    /// Native integer (covers the full i64 and u64 ranges)
    Int(i128),
    /// Native integer literal too wide for `i128`, kept as its digits
    BigInt(String),
    /// Native floating point number
    Float(f64),
    /// Text, possibly masquerading as another type
    Text(String),
    /// Nested mapping, classified shallowly
    Object(serde_json::Map<String, Value>),
    /// Nested sequence, classified shallowly
    Array(Vec<Value>),
}

impl RawValue {
    /// Render the value the way it is shown in field examples.
    pub fn render(&self) -> String {
        match self {
            RawValue::Null => "null".to_string(),
            RawValue::Bool(b) => b.to_string(),
            RawValue::Int(i) => i.to_string(),
            RawValue::BigInt(digits) => digits.clone(),
            // Debug keeps the fractional part visible ("1.0" rather than "1")
            RawValue::Float(f) => format!("{:?}", f),
            RawValue::Text(s) => s.clone(),
            RawValue::Object(map) => Value::Object(map.clone()).to_string(),
            RawValue::Array(items) => Value::Array(items.clone()).to_string(),
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => number_value(&n),
            Value::String(s) => RawValue::Text(s),
            Value::Array(items) => RawValue::Array(items),
            Value::Object(map) => RawValue::Object(map),
        }
    }
}

/// Numbers keep their literal text, so an integer literal of any width
/// stays an integer.
fn number_value(n: &Number) -> RawValue {
    if let Some(i) = n.as_i64() {
        return RawValue::Int(i as i128);
    }
    if let Some(u) = n.as_u64() {
        return RawValue::Int(u as i128);
    }

    let literal = n.to_string();
    if is_int_text(&literal) {
        return match literal.parse::<i128>() {
            Ok(i) => RawValue::Int(i),
            Err(_) => RawValue::BigInt(literal),
        };
    }
    RawValue::Float(n.as_f64().unwrap_or(f64::NAN))
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Convert a JSON object into a [`Record`].
pub fn record_from_json(map: serde_json::Map<String, Value>) -> Record {
    map.into_iter()
        .map(|(key, value)| (key, RawValue::from(value)))
        .collect()
}
