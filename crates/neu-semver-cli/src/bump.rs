//! Bump and set commands - derive a new release version from an existing one.

use anyhow::Result;
use clap::{Args, ValueEnum};
use neu_semver::Version;

use crate::config::{OutputFormat, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    Major,
    Minor,
    Patch,
}

#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Field to increment
    #[arg(value_enum)]
    pub part: Part,

    /// Version to start from
    #[arg(value_name = "VERSION")]
    pub version: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Field to override
    #[arg(value_enum)]
    pub part: Part,

    /// New value for the field
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: i64,

    /// Version to start from
    #[arg(value_name = "VERSION")]
    pub version: String,
}

pub fn bump(version: &Version, part: Part) -> neu_semver::Result<Version> {
    match part {
        Part::Major => version.next_major(),
        Part::Minor => version.next_minor(),
        Part::Patch => version.next_patch(),
    }
}

pub fn set(version: &Version, part: Part, value: i64) -> neu_semver::Result<Version> {
    match part {
        Part::Major => version.with_major(value),
        Part::Minor => version.with_minor(value),
        Part::Patch => version.with_patch(value),
    }
}

fn print_result(from: &Version, to: &Version, settings: &Settings) {
    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "from": from, "to": to })),
        OutputFormat::Text => println!("{}", to),
    }
}

pub fn execute(args: BumpArgs, settings: &Settings) -> Result<i32> {
    let version = Version::parse(&args.version)?;
    let next = bump(&version, args.part)?;
    log::debug!("Bumped {:?} of {} to {}", args.part, version, next);
    print_result(&version, &next, settings);
    Ok(0)
}

pub fn execute_set(args: SetArgs, settings: &Settings) -> Result<i32> {
    let version = Version::parse(&args.version)?;
    let next = set(&version, args.part, args.value)?;
    log::debug!("Set {:?} of {} to {}", args.part, version, args.value);
    print_result(&version, &next, settings);
    Ok(0)
}
