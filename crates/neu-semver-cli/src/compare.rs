//! Compare command - print the precedence of one version against another.

use anyhow::{Context, Result};
use clap::Args;
use neu_semver::{Comparator, Operator, Version};
use std::cmp::Ordering;

use crate::config::{OutputFormat, Settings};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "VERSION1")]
    pub version1: String,

    /// Right-hand version
    #[arg(value_name = "VERSION2")]
    pub version2: String,

    /// Check an operator (=, ==, <, <=, >, >=, !=, <>) instead of printing the ordering;
    /// the exit code is 0 when it holds and 1 otherwise
    #[arg(short = 'o', long)]
    pub operator: Option<String>,
}

pub fn ordering_sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn execute(args: CompareArgs, settings: &Settings) -> Result<i32> {
    let v1 = Version::parse(&args.version1).context("Left-hand version")?;
    let v2 = Version::parse(&args.version2).context("Right-hand version")?;
    let ordering = Comparator::compare(&v1, &v2);

    if let Some(operator) = &args.operator {
        let operator: Operator = operator.parse()?;
        let holds = operator.matches(ordering);
        match settings.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({
                    "left": v1,
                    "operator": operator.as_str(),
                    "right": v2,
                    "result": holds,
                })
            ),
            OutputFormat::Text => println!("{}", holds),
        }
        return Ok(if holds { 0 } else { 1 });
    }

    match settings.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "left": v1,
                "right": v2,
                "result": ordering_sign(ordering),
            })
        ),
        OutputFormat::Text => println!("{}", ordering_sign(ordering)),
    }

    Ok(0)
}
