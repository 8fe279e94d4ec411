//! Type merging for observed field types
//!
//! Every value of a field is classified independently; the observed set is
//! then collapsed into one canonical type.

use std::collections::BTreeSet;

use super::types::FieldType;

/// Merge a set of observed types into one canonical type.
///
/// `null` is ignored unless it is the only member. Among the rest,
/// `object` beats `array`, which beats `string`. Numbers widen to `float`
/// when any float was seen, `int` beats `bool`, and `bool` only survives
/// on its own.
pub fn merge_types(observed: &BTreeSet<FieldType>) -> FieldType {
    let has = |t: FieldType| observed.contains(&t);

    if has(FieldType::Object) {
        FieldType::Object
    } else if has(FieldType::Array) {
        FieldType::Array
    } else if has(FieldType::String) {
        FieldType::String
    } else if has(FieldType::Float) {
        FieldType::Float
    } else if has(FieldType::Int) {
        FieldType::Int
    } else if has(FieldType::Bool) {
        FieldType::Bool
    } else if observed.iter().any(|t| *t != FieldType::Null) {
        FieldType::String
    } else {
        FieldType::Null
    }
}
