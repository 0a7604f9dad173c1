//! Sort and highest commands - order version lists by precedence.

use anyhow::Result;
use clap::Args;
use neu_semver::Semver;

use crate::config::{OutputFormat, Settings, SortOrder};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Version strings to sort
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort lowest first
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Sort highest first (default unless configured otherwise)
    #[arg(long)]
    pub desc: bool,
}

#[derive(Args, Debug)]
pub struct HighestArgs {
    /// Version strings to pick from
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,
}

fn resolve_order(args: &SortArgs, settings: &Settings) -> SortOrder {
    if args.asc {
        SortOrder::Ascending
    } else if args.desc {
        SortOrder::Descending
    } else {
        settings.sort_order
    }
}

pub fn execute(args: SortArgs, settings: &Settings) -> Result<i32> {
    let sorted = match resolve_order(&args, settings) {
        SortOrder::Ascending => Semver::sort(&args.versions)?,
        SortOrder::Descending => Semver::rsort(&args.versions)?,
    };

    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sorted)?),
        OutputFormat::Text => {
            for version in &sorted {
                println!("{}", version);
            }
        }
    }

    Ok(0)
}

pub fn execute_highest(args: HighestArgs, settings: &Settings) -> Result<i32> {
    let highest = Semver::find_highest(&args.versions)?;

    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "highest": highest })),
        OutputFormat::Text => println!("{}", highest),
    }

    Ok(0)
}
