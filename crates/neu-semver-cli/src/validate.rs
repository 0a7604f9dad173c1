//! Validate command - check version strings against the SemVer grammar.

use anyhow::Result;
use clap::Args;
use console::style;
use neu_semver::VersionParser;

use crate::config::{OutputFormat, Settings};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Version strings to validate
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Print nothing, only set the exit code
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

pub struct ValidationResult {
    pub input: String,
    pub error: Option<String>,
}

pub fn validate_all(versions: &[String]) -> Vec<ValidationResult> {
    let parser = VersionParser::new();
    versions
        .iter()
        .map(|input| ValidationResult {
            input: input.clone(),
            error: parser.parse(input).err().map(|e| e.to_string()),
        })
        .collect()
}

pub fn execute(args: ValidateArgs, settings: &Settings) -> Result<i32> {
    let results = validate_all(&args.versions);
    let invalid = results.iter().filter(|r| r.error.is_some()).count();

    if !args.quiet {
        match settings.format {
            OutputFormat::Json => {
                let json: Vec<_> = results
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "version": r.input,
                            "valid": r.error.is_none(),
                            "error": r.error,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Text => {
                for result in &results {
                    match &result.error {
                        None => println!("{} {}", style("valid").green(), result.input),
                        Some(error) => println!("{} {} ({})", style("invalid").red(), result.input, error),
                    }
                }
            }
        }
    }

    Ok(if invalid > 0 { 1 } else { 0 })
}
