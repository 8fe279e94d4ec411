//! The default drift check: infer both samples, diff them, write reports

use std::path::PathBuf;

use crate::error::CliError;
use driftfence_core::diff::{DriftReport, diff_schemas};
use driftfence_core::inference::{InferenceConfig, infer_schema_from_path};
use driftfence_core::report::{
    DriftPayload, HTML_REPORT_FILE, JSON_REPORT_FILE, render_summary, write_html, write_json,
};

pub const EXIT_OK: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_BREAKING: u8 = 2;
pub const EXIT_RISK: u8 = 3;

/// Arguments for the drift check
pub struct DiffArgs {
    /// Baseline sample
    pub before: PathBuf,
    /// Candidate sample
    pub after: PathBuf,
    /// Row cap per sample
    pub max_rows: usize,
    /// Examples kept per field
    pub max_examples: usize,
    /// Directory receiving the reports
    pub out_dir: PathBuf,
    /// Suppress progress output on stderr
    pub quiet: bool,
}

/// What a finished drift check produced
pub struct DiffOutcome {
    pub report: DriftReport,
    pub json_path: PathBuf,
    pub html_path: PathBuf,
}

/// Handle the drift check
pub fn handle_diff(args: &DiffArgs) -> Result<DiffOutcome, CliError> {
    let config = InferenceConfig::builder()
        .max_rows(args.max_rows)
        .max_examples(args.max_examples)
        .build();

    if !args.quiet {
        eprintln!("Comparing samples...");
        eprintln!("  Before: {}", args.before.display());
        eprintln!("  After: {}", args.after.display());
        eprintln!("  Max rows: {}", args.max_rows);
    }

    let before = infer_schema_from_path(&args.before, &config)?;
    let after = infer_schema_from_path(&args.after, &config)?;

    if !args.quiet {
        eprintln!(
            "  Sampled: {} -> {} rows, {} -> {} fields",
            before.sampled_rows,
            after.sampled_rows,
            before.len(),
            after.len()
        );
    }

    let report = diff_schemas(&before, &after);
    let payload = DriftPayload::new(&before, &after, &report);

    let json_path = args.out_dir.join(JSON_REPORT_FILE);
    let html_path = args.out_dir.join(HTML_REPORT_FILE);
    write_json(&payload, &json_path)?;
    write_html(&payload, &html_path)?;
    tracing::info!(
        out_dir = %args.out_dir.display(),
        breaking = report.breaking,
        risk_score = report.risk_score,
        "Drift reports written"
    );

    print!("{}", render_summary(&report));

    if !args.quiet {
        eprintln!();
        eprintln!("Reports written to:");
        eprintln!("  {}", json_path.display());
        eprintln!("  {}", html_path.display());
    }

    Ok(DiffOutcome {
        report,
        json_path,
        html_path,
    })
}

/// Map a report to the process exit status.
///
/// Breaking drift takes precedence over the risk threshold.
pub fn exit_status(report: &DriftReport, fail_on_breaking: bool, fail_risk: Option<u32>) -> u8 {
    if fail_on_breaking && report.breaking {
        return EXIT_BREAKING;
    }
    match fail_risk {
        Some(threshold) if report.risk_score >= threshold => EXIT_RISK,
        _ => EXIT_OK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn report(breaking: bool, risk_score: u32) -> DriftReport {
        DriftReport {
            changes: Vec::new(),
            breaking,
            risk_score,
        }
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&report(false, 0), true, Some(10)), EXIT_OK);
        assert_eq!(exit_status(&report(true, 35), false, None), EXIT_OK);
        assert_eq!(exit_status(&report(true, 35), true, None), EXIT_BREAKING);
        assert_eq!(exit_status(&report(true, 35), true, Some(10)), EXIT_BREAKING);
        assert_eq!(exit_status(&report(true, 35), false, Some(35)), EXIT_RISK);
        assert_eq!(exit_status(&report(false, 34), false, Some(35)), EXIT_OK);
        assert_eq!(exit_status(&report(false, 0), false, Some(0)), EXIT_RISK);
    }

    #[test]
    fn test_handle_diff_writes_reports() {
        let dir = TempDir::new().unwrap();
        let before = dir.path().join("before.csv");
        let after = dir.path().join("after.csv");
        fs::write(&before, "id,status\n1,open\n2,closed\n").unwrap();
        fs::write(&after, "id\n1\n2\n").unwrap();

        let args = DiffArgs {
            before,
            after,
            max_rows: 100,
            max_examples: 3,
            out_dir: dir.path().join("out"),
            quiet: true,
        };

        let outcome = handle_diff(&args).unwrap();
        assert!(outcome.report.breaking);
        assert_eq!(outcome.report.risk_score, 35);
        assert!(outcome.json_path.ends_with(JSON_REPORT_FILE));
        assert!(outcome.json_path.exists());
        assert!(outcome.html_path.exists());
        assert_eq!(exit_status(&outcome.report, true, None), EXIT_BREAKING);
    }

    #[test]
    fn test_handle_diff_missing_input() {
        let dir = TempDir::new().unwrap();
        let args = DiffArgs {
            before: dir.path().join("missing.jsonl"),
            after: dir.path().join("also-missing.jsonl"),
            max_rows: 100,
            max_examples: 3,
            out_dir: dir.path().join("out"),
            quiet: true,
        };

        assert!(matches!(handle_diff(&args), Err(CliError::Source(_))));
        assert!(!dir.path().join("out").exists());
    }
}
