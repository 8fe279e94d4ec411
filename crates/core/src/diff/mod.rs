//! Drift detection between two inferred schemas
//!
//! Produces a [`DriftReport`]: added and removed fields, type, nullability and
//! presence changes, each with a severity, plus an overall breaking verdict
//! and a capped risk score.

mod engine;
mod policy;
mod types;

pub use engine::{DiffEngine, diff_schemas};
pub use policy::{
    NOTE_ADDED, NOTE_BECAME_NULLABLE, NOTE_BECAME_REQUIRED, NOTE_NUMERIC_CHANGED,
    NOTE_PRESENCE_SHIFTED, NOTE_REMOVED, NOTE_TYPE_INCOMPATIBLE, NOTE_TYPE_NARROWED,
    NOTE_TYPE_WIDENED, PRESENCE_DRIFT_THRESHOLD, RISK_SCORE_CAP, classify_nullability_change,
    classify_type_change, is_breaking, presence_drifted, risk_score, severity_weight,
};
pub use types::{Change, ChangeKind, DriftReport, Severity};
