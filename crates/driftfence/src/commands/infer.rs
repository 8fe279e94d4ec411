//! CLI command for inferring a single schema

use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::CliError;
use driftfence_core::inference::{DatasetSchema, InferenceConfig, SchemaInferrer};
use driftfence_core::sources::read_rows;

/// Serialization used for `infer` output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Arguments for the `infer` command
pub struct InferArgs {
    /// Sample to read
    pub path: PathBuf,
    /// Row cap
    pub max_rows: usize,
    /// Examples kept per field
    pub max_examples: usize,
    /// Output format (json, yaml)
    pub format: OutputFormat,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Suppress progress output on stderr
    pub quiet: bool,
}

/// Serialize a schema in the requested format
pub fn render_schema(schema: &DatasetSchema, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(schema)
            .map_err(|e| CliError::SerializationError(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(schema).map_err(|e| CliError::SerializationError(e.to_string()))
        }
    }
}

/// Handle the `infer` command
pub fn handle_infer(args: &InferArgs) -> Result<(), CliError> {
    let config = InferenceConfig::builder()
        .max_rows(args.max_rows)
        .max_examples(args.max_examples)
        .build();

    let mut source = read_rows(&args.path, config.max_rows)?;

    if !args.quiet {
        eprintln!("Inferring schema from {}...", args.path.display());
        eprintln!("  Format: {}", source.format());
        eprintln!("  Max rows: {}", config.max_rows);
    }

    let mut inferrer = SchemaInferrer::with_config(source.format(), config);
    for record in source.by_ref() {
        inferrer.add_record(&record);
    }

    let stats = inferrer.stats();
    let schema = inferrer.finalize();

    if !args.quiet {
        eprintln!();
        eprintln!("Inference complete:");
        eprintln!("  Records processed: {}", stats.records_processed);
        eprintln!("  Records skipped: {}", source.skipped());
        eprintln!("  Fields discovered: {}", stats.fields_discovered);
    }

    let output_str = render_schema(&schema, args.format)?;

    if let Some(ref output_path) = args.output {
        std::fs::write(output_path, &output_str)
            .map_err(|e| CliError::FileWriteError(format!("{}: {}", output_path.display(), e)))?;
        if !args.quiet {
            eprintln!();
            eprintln!("Schema written to: {}", output_path.display());
        }
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftfence_core::inference::{FieldSchema, FieldType};
    use driftfence_core::sources::SourceFormat;
    use std::fs;
    use tempfile::TempDir;

    fn schema() -> DatasetSchema {
        DatasetSchema::from_fields(
            SourceFormat::Jsonl,
            2,
            vec![FieldSchema::new("id", FieldType::Int, false, 1.0)],
        )
    }

    #[test]
    fn test_render_json() {
        let out = render_schema(&schema(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["format"], "jsonl");
        assert_eq!(value["sampled_rows"], 2);
        assert_eq!(value["fields"]["id"]["type"], "int");
    }

    #[test]
    fn test_render_yaml() {
        let out = render_schema(&schema(), OutputFormat::Yaml).unwrap();
        assert!(out.contains("format: jsonl"));
        assert!(out.contains("type: int"));
    }

    #[test]
    fn test_handle_infer_writes_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("rows.jsonl");
        let output = dir.path().join("schema.json");
        fs::write(&input, "{\"a\": 1}\n{\"a\": null, \"b\": \"x\"}\n").unwrap();

        let args = InferArgs {
            path: input,
            max_rows: 10,
            max_examples: 3,
            format: OutputFormat::Json,
            output: Some(output.clone()),
            quiet: true,
        };
        handle_infer(&args).unwrap();

        let written: DatasetSchema =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written.sampled_rows, 2);
        assert!(written.fields["a"].nullable);
        assert_eq!(written.fields["b"].presence, 0.5);
    }
}
