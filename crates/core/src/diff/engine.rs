//! Drift diff engine
//!
//! Compares a before and an after [`DatasetSchema`] field by field.

use std::collections::BTreeSet;

use crate::inference::{DatasetSchema, FieldSchema};

use super::policy::{
    NOTE_ADDED, NOTE_PRESENCE_SHIFTED, NOTE_REMOVED, classify_nullability_change,
    classify_type_change, is_breaking, presence_drifted, risk_score,
};
use super::types::{Change, ChangeKind, DriftReport, Severity};

/// The diff engine that compares inferred schemas
pub struct DiffEngine;

impl DiffEngine {
    /// Compare two schemas and return every detected difference
    pub fn diff(before: &DatasetSchema, after: &DatasetSchema) -> DriftReport {
        let before_keys: BTreeSet<&str> = before.fields.keys().map(String::as_str).collect();
        let after_keys: BTreeSet<&str> = after.fields.keys().map(String::as_str).collect();

        let mut changes = Vec::new();

        // BTreeSet iteration keeps each group sorted by field name
        for name in after_keys.difference(&before_keys) {
            let field = &after.fields[*name];
            changes.push(Change {
                kind: ChangeKind::Added,
                field: name.to_string(),
                before: None,
                after: Some(field.field_type.to_string()),
                severity: Severity::Low,
                note: NOTE_ADDED.to_string(),
            });
        }

        for name in before_keys.difference(&after_keys) {
            let field = &before.fields[*name];
            changes.push(Change {
                kind: ChangeKind::Removed,
                field: name.to_string(),
                before: Some(field.field_type.to_string()),
                after: None,
                severity: Severity::High,
                note: NOTE_REMOVED.to_string(),
            });
        }

        for name in before_keys.intersection(&after_keys) {
            Self::compare_fields(&before.fields[*name], &after.fields[*name], &mut changes);
        }

        let report = DriftReport {
            breaking: is_breaking(&changes),
            risk_score: risk_score(&changes),
            changes,
        };

        tracing::info!(
            changes = report.change_count(),
            breaking = report.breaking,
            risk_score = report.risk_score,
            "Schemas compared"
        );

        report
    }

    /// Type, nullability and presence are checked independently, so one
    /// field pair can yield up to three changes.
    fn compare_fields(before: &FieldSchema, after: &FieldSchema, changes: &mut Vec<Change>) {
        if before.field_type != after.field_type {
            let (severity, note) = classify_type_change(before.field_type, after.field_type);
            changes.push(Change {
                kind: ChangeKind::TypeChanged,
                field: before.name.clone(),
                before: Some(before.field_type.to_string()),
                after: Some(after.field_type.to_string()),
                severity,
                note: note.to_string(),
            });
        }

        if before.nullable != after.nullable {
            let (severity, note) = classify_nullability_change(after.nullable);
            changes.push(Change {
                kind: ChangeKind::NullabilityChanged,
                field: before.name.clone(),
                before: Some(before.nullable.to_string()),
                after: Some(after.nullable.to_string()),
                severity,
                note: note.to_string(),
            });
        }

        if presence_drifted(before.presence, after.presence) {
            changes.push(Change {
                kind: ChangeKind::PresenceChanged,
                field: before.name.clone(),
                before: Some(format!("{:.2}", before.presence)),
                after: Some(format!("{:.2}", after.presence)),
                severity: Severity::Medium,
                note: NOTE_PRESENCE_SHIFTED.to_string(),
            });
        }
    }
}

/// Compare two schemas; see [`DiffEngine::diff`]
pub fn diff_schemas(before: &DatasetSchema, after: &DatasetSchema) -> DriftReport {
    DiffEngine::diff(before, after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::FieldType;
    use crate::sources::SourceFormat;

    fn schema(fields: Vec<FieldSchema>) -> DatasetSchema {
        DatasetSchema::from_fields(SourceFormat::Csv, 10, fields)
    }

    fn field(name: &str, field_type: FieldType) -> FieldSchema {
        FieldSchema::new(name, field_type, false, 1.0)
    }

    #[test]
    fn test_added_removed_type_change() {
        let before = schema(vec![
            field("a", FieldType::Int),
            FieldSchema::new("b", FieldType::String, true, 1.0),
        ]);
        let after = schema(vec![
            field("a", FieldType::Float),
            FieldSchema::new("c", FieldType::String, true, 1.0),
        ]);

        let report = diff_schemas(&before, &after);
        let kinds: Vec<ChangeKind> = report.changes.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ChangeKind::Added, ChangeKind::Removed, ChangeKind::TypeChanged]
        );
        assert!(report.breaking);
        assert_eq!(report.risk_score, 5 + 35 + 15);
    }

    #[test]
    fn test_groups_sorted_by_field() {
        let before = schema(vec![
            field("m", FieldType::Int),
            field("z_old", FieldType::Int),
            field("a_old", FieldType::Int),
            field("k", FieldType::Int),
        ]);
        let after = schema(vec![
            field("m", FieldType::String),
            field("k", FieldType::String),
            field("y_new", FieldType::Int),
            field("b_new", FieldType::Int),
        ]);

        let report = diff_schemas(&before, &after);
        let order: Vec<(&str, ChangeKind)> = report
            .changes
            .iter()
            .map(|c| (c.field.as_str(), c.kind))
            .collect();
        assert_eq!(
            order,
            vec![
                ("b_new", ChangeKind::Added),
                ("y_new", ChangeKind::Added),
                ("a_old", ChangeKind::Removed),
                ("z_old", ChangeKind::Removed),
                ("k", ChangeKind::TypeChanged),
                ("m", ChangeKind::TypeChanged),
            ]
        );
    }

    #[test]
    fn test_one_field_can_emit_three_changes() {
        let before = schema(vec![FieldSchema::new("x", FieldType::Int, false, 1.0)]);
        let after = schema(vec![FieldSchema::new("x", FieldType::String, true, 0.5)]);

        let report = diff_schemas(&before, &after);
        let kinds: Vec<ChangeKind> = report.changes.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::TypeChanged,
                ChangeKind::NullabilityChanged,
                ChangeKind::PresenceChanged
            ]
        );
        assert_eq!(report.risk_score, 45);
        assert!(!report.breaking);
    }

    #[test]
    fn test_added_and_removed_carry_type_names() {
        let before = schema(vec![field("old", FieldType::Bool)]);
        let after = schema(vec![field("new", FieldType::Array)]);

        let report = diff_schemas(&before, &after);
        assert_eq!(report.changes[0].after.as_deref(), Some("array"));
        assert_eq!(report.changes[0].before, None);
        assert_eq!(report.changes[1].before.as_deref(), Some("bool"));
        assert_eq!(report.changes[1].after, None);
    }

    #[test]
    fn test_empty_schemas() {
        let report = diff_schemas(&schema(vec![]), &schema(vec![]));
        assert!(report.is_empty());
        assert!(!report.breaking);
        assert_eq!(report.risk_score, 0);
    }
}
