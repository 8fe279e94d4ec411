//! Change and report types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of drift detected for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    TypeChanged,
    NullabilityChanged,
    PresenceChanged,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::TypeChanged => "type_changed",
            ChangeKind::NullabilityChanged => "nullability_changed",
            ChangeKind::PresenceChanged => "presence_changed",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity classification for a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic difference between a before and after field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub kind: ChangeKind,
    pub field: String,
    /// Prior value relevant to the change (type name, flag or ratio)
    pub before: Option<String>,
    /// New value relevant to the change
    pub after: Option<String>,
    pub severity: Severity,
    /// Fixed rationale for this kind of transition
    pub note: String,
}

/// Classified change set between two schemas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftReport {
    /// Added, then removed, then per-field changes; each group sorted by field
    pub changes: Vec<Change>,
    /// Any high-severity change or any removal
    pub breaking: bool,
    /// Additive severity score, capped at 100
    pub risk_score: u32,
}

impl DriftReport {
    /// Number of changes
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// True when no drift was found
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Changes of one kind, in report order
    pub fn changes_of_kind(&self, kind: ChangeKind) -> impl Iterator<Item = &Change> {
        self.changes.iter().filter(move |c| c.kind == kind)
    }

    /// Count changes by severity as `(low, medium, high)`
    pub fn severity_counts(&self) -> (usize, usize, usize) {
        self.changes
            .iter()
            .fold((0, 0, 0), |(low, medium, high), c| match c.severity {
                Severity::Low => (low + 1, medium, high),
                Severity::Medium => (low, medium + 1, high),
                Severity::High => (low, medium, high + 1),
            })
    }
}
