//! driftfence - detect schema drift between two data samples

mod commands;
mod error;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use driftfence_core::inference::{DEFAULT_MAX_EXAMPLES, DEFAULT_MAX_ROWS};

use commands::diff::{DiffArgs, EXIT_ERROR, exit_status, handle_diff};
use commands::infer::{InferArgs, OutputFormat, handle_infer};
use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "driftfence",
    version,
    about = "Infer schemas from CSV/JSON/JSONL samples and flag drift between them",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
struct Cli {
    /// Baseline sample (.csv, .json or .jsonl)
    #[arg(required = true)]
    before: Option<PathBuf>,

    /// Candidate sample compared against the baseline
    #[arg(required = true)]
    after: Option<PathBuf>,

    #[command(flatten)]
    sampling: SamplingArgs,

    /// Directory for drift_report.json and report.html
    #[arg(long, default_value = ".driftfence-out")]
    out_dir: PathBuf,

    /// Exit with status 2 when the drift is breaking
    #[arg(long)]
    fail_on_breaking: bool,

    /// Exit with status 3 when the risk score is at least N
    #[arg(long, value_name = "N")]
    fail_risk: Option<u32>,

    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Copy)]
struct SamplingArgs {
    /// Maximum rows sampled from each file
    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    max_rows: usize,

    /// Example values kept per field
    #[arg(long, default_value_t = DEFAULT_MAX_EXAMPLES)]
    max_examples: usize,
}

#[derive(Args, Debug, Clone, Copy)]
struct LogArgs {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only errors; no progress output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Infer and print the schema of a single sample
    Infer {
        /// Sample to read (.csv, .json or .jsonl)
        path: PathBuf,

        #[command(flatten)]
        sampling: SamplingArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        log: LogArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log = match &cli.command {
        Some(Commands::Infer { log, .. }) => *log,
        None => cli.log,
    };
    logging::init(log.verbose, log.quiet);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    match cli.command {
        Some(Commands::Infer {
            path,
            sampling,
            format,
            output,
            log,
        }) => {
            let args = InferArgs {
                path,
                max_rows: sampling.max_rows,
                max_examples: sampling.max_examples,
                format,
                output,
                quiet: log.quiet,
            };
            handle_infer(&args)
                .with_context(|| format!("Schema inference failed for {}", args.path.display()))?;
            Ok(0)
        }
        None => {
            let (Some(before), Some(after)) = (cli.before, cli.after) else {
                return Err(CliError::InvalidArgument(
                    "both <BEFORE> and <AFTER> paths are required".to_string(),
                )
                .into());
            };

            let args = DiffArgs {
                before,
                after,
                max_rows: cli.sampling.max_rows,
                max_examples: cli.sampling.max_examples,
                out_dir: cli.out_dir,
                quiet: cli.log.quiet,
            };
            let outcome = handle_diff(&args).context("Drift check failed")?;

            Ok(exit_status(
                &outcome.report,
                cli.fail_on_breaking,
                cli.fail_risk,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_default_mode() {
        let cli = Cli::try_parse_from(["driftfence", "old.csv", "new.jsonl"]).unwrap();
        assert_eq!(cli.before, Some(PathBuf::from("old.csv")));
        assert_eq!(cli.after, Some(PathBuf::from("new.jsonl")));
        assert_eq!(cli.sampling.max_rows, 5000);
        assert_eq!(cli.sampling.max_examples, 3);
        assert_eq!(cli.out_dir, PathBuf::from(".driftfence-out"));
        assert!(!cli.fail_on_breaking);
        assert_eq!(cli.fail_risk, None);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_gates() {
        let cli = Cli::try_parse_from([
            "driftfence",
            "a.csv",
            "b.csv",
            "--max-rows",
            "100",
            "--fail-on-breaking",
            "--fail-risk",
            "40",
            "--out-dir",
            "reports",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.sampling.max_rows, 100);
        assert!(cli.fail_on_breaking);
        assert_eq!(cli.fail_risk, Some(40));
        assert_eq!(cli.out_dir, PathBuf::from("reports"));
        assert_eq!(cli.log.verbose, 2);
    }

    #[test]
    fn test_parse_requires_both_paths() {
        assert!(Cli::try_parse_from(["driftfence", "a.csv"]).is_err());
        assert!(Cli::try_parse_from(["driftfence"]).is_err());
    }

    #[test]
    fn test_parse_infer() {
        let cli = Cli::try_parse_from([
            "driftfence",
            "infer",
            "rows.json",
            "--format",
            "yaml",
            "--max-rows",
            "10",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Infer {
                path,
                sampling,
                format,
                output,
                ..
            }) => {
                assert_eq!(path, PathBuf::from("rows.json"));
                assert_eq!(sampling.max_rows, 10);
                assert_eq!(format, OutputFormat::Yaml);
                assert!(output.is_none());
            }
            None => panic!("expected infer subcommand"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["driftfence", "a.csv", "b.csv", "-v", "-q"]).is_err());
    }
}
