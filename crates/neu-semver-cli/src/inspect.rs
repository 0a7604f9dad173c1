//! Inspect command - show the parsed fields of a version.

use anyhow::Result;
use clap::Args;
use console::style;
use neu_semver::Version;
use serde::Serialize;

use crate::config::{OutputFormat, Settings};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Version to inspect
    #[arg(value_name = "VERSION")]
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct VersionInfo<'a> {
    pub version: &'a str,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<&'a str>,
    pub build: Vec<&'a str>,
}

impl<'a> VersionInfo<'a> {
    pub fn new(version: &'a Version) -> Self {
        VersionInfo {
            version: version.original(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version.pre_identifiers().collect(),
            build: version.build_identifiers().collect(),
        }
    }
}

pub fn execute(args: InspectArgs, settings: &Settings) -> Result<i32> {
    let version = Version::parse(&args.version)?;
    let info = VersionInfo::new(&version);

    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Text => {
            println!("{} {}", style("version   ").bold(), info.version);
            println!("{} {}", style("major     ").bold(), info.major);
            println!("{} {}", style("minor     ").bold(), info.minor);
            println!("{} {}", style("patch     ").bold(), info.patch);
            if !info.prerelease.is_empty() {
                println!("{} {}", style("prerelease").bold(), info.prerelease.join(", "));
            }
            if !info.build.is_empty() {
                println!("{} {}", style("build     ").bold(), info.build.join(", "));
            }
        }
    }

    Ok(0)
}
