//! Severity rules, notes and risk scoring

use crate::inference::FieldType;

use super::types::{Change, ChangeKind, Severity};

/// Absolute presence delta at which a presence change is reported
pub const PRESENCE_DRIFT_THRESHOLD: f64 = 0.2;

/// Slack for binary rounding when comparing a delta to the threshold.
/// 0.7 - 0.5 evaluates to 0.19999999999999996 and must still count.
const PRESENCE_EPSILON: f64 = 1e-9;

/// Upper bound of the risk score
pub const RISK_SCORE_CAP: u32 = 100;

pub const NOTE_ADDED: &str = "Field added. Usually safe unless strict schemas are enforced.";
pub const NOTE_REMOVED: &str = "Field removed. Downstream queries may fail.";
pub const NOTE_TYPE_NARROWED: &str = "Type narrowed. May break free-form values.";
pub const NOTE_TYPE_WIDENED: &str = "Type widened. Usually safe.";
pub const NOTE_NUMERIC_CHANGED: &str = "Numeric type changed. Watch rounding.";
pub const NOTE_TYPE_INCOMPATIBLE: &str = "Treat as breaking until verified.";
pub const NOTE_BECAME_NULLABLE: &str = "Downstream non-null assumptions may break.";
pub const NOTE_BECAME_REQUIRED: &str = "Usually fine.";
pub const NOTE_PRESENCE_SHIFTED: &str =
    "Field presence shifted. Consumers expecting the key may see gaps.";

/// Points contributed by one change of the given severity
pub fn severity_weight(severity: Severity) -> u32 {
    match severity {
        Severity::Low => 5,
        Severity::Medium => 15,
        Severity::High => 35,
    }
}

/// Classify a type transition as `(severity, note)`
pub fn classify_type_change(before: FieldType, after: FieldType) -> (Severity, &'static str) {
    use FieldType as T;

    match (before, after) {
        (T::String, T::Int | T::Float | T::Bool) => (Severity::Medium, NOTE_TYPE_NARROWED),
        (T::Int | T::Float, T::String) => (Severity::Medium, NOTE_TYPE_WIDENED),
        (T::Int, T::Float) | (T::Float, T::Int) => (Severity::Medium, NOTE_NUMERIC_CHANGED),
        _ => (Severity::High, NOTE_TYPE_INCOMPATIBLE),
    }
}

/// Classify a nullability flip given the new flag
pub fn classify_nullability_change(now_nullable: bool) -> (Severity, &'static str) {
    if now_nullable {
        (Severity::Medium, NOTE_BECAME_NULLABLE)
    } else {
        (Severity::Low, NOTE_BECAME_REQUIRED)
    }
}

/// Whether two presence ratios are far enough apart to report
pub fn presence_drifted(before: f64, after: f64) -> bool {
    (before - after).abs() + PRESENCE_EPSILON >= PRESENCE_DRIFT_THRESHOLD
}

/// Sum severity weights, capped at [`RISK_SCORE_CAP`]
pub fn risk_score(changes: &[Change]) -> u32 {
    changes
        .iter()
        .map(|c| severity_weight(c.severity))
        .fold(0u32, u32::saturating_add)
        .min(RISK_SCORE_CAP)
}

/// A change set is breaking if anything is high severity or removed
pub fn is_breaking(changes: &[Change]) -> bool {
    changes
        .iter()
        .any(|c| c.severity == Severity::High || c.kind == ChangeKind::Removed)
}
