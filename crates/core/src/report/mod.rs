//! Report output
//!
//! Turns a [`DriftReport`] plus the two schemas it came from into a JSON
//! document, a static HTML page and a short console summary.

mod error;
mod html;
mod payload;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub use error::ReportError;
pub use html::{escape_html, render_html};
pub use payload::{DriftPayload, FieldPayload, PayloadSummary, SchemaPayload};

use crate::diff::DriftReport;

/// Default file name of the JSON report
pub const JSON_REPORT_FILE: &str = "drift_report.json";

/// Default file name of the HTML report
pub const HTML_REPORT_FILE: &str = "report.html";

fn ensure_parent(path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Report written");
    Ok(())
}

/// Write the payload as pretty-printed JSON with a trailing newline
pub fn write_json(payload: &DriftPayload, path: &Path) -> Result<(), ReportError> {
    let mut json = serde_json::to_string_pretty(payload)?;
    json.push('\n');
    write_file(path, &json)
}

/// Write the rendered HTML page
pub fn write_html(payload: &DriftPayload, path: &Path) -> Result<(), ReportError> {
    write_file(path, &render_html(payload))
}

/// Multi-line console summary of a report
pub fn render_summary(report: &DriftReport) -> String {
    let (low, medium, high) = report.severity_counts();
    let mut out = String::new();

    let verdict = if report.breaking { "BREAKING" } else { "non-breaking" };
    let _ = writeln!(out, "Drift: {}", verdict);
    let _ = writeln!(out, "Risk score: {}/100", report.risk_score);
    let _ = writeln!(
        out,
        "Changes: {} (high: {}, medium: {}, low: {})",
        report.change_count(),
        high,
        medium,
        low
    );

    for change in &report.changes {
        let _ = writeln!(
            out,
            "  [{}] {} {}: {} -> {}",
            change.severity,
            change.kind,
            change.field,
            change.before.as_deref().unwrap_or("-"),
            change.after.as_deref().unwrap_or("-"),
        );
    }

    out
}
