mod bump;
mod compare;
mod config;
mod inspect;
mod sort;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use config::{OutputFormat, SemverConfig, Settings};

#[derive(Parser, Debug)]
#[command(name = "semver")]
#[command(about = "Parse, compare and derive SemVer 2.0.0 versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Output format (overrides semver.toml)
    #[arg(short = 'f', long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Configuration file (default: semver.toml searched upward from the working directory)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether version strings are valid SemVer 2.0.0
    Validate(validate::ValidateArgs),

    /// Compare two versions by precedence (prints -1, 0 or 1)
    Compare(compare::CompareArgs),

    /// Sort versions by precedence
    Sort(sort::SortArgs),

    /// Print the version with the highest precedence
    Highest(sort::HighestArgs),

    /// Increment the major, minor or patch field
    Bump(bump::BumpArgs),

    /// Override the major, minor or patch field
    Set(bump::SetArgs),

    /// Show the parsed fields of a version
    Inspect(inspect::InspectArgs),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Option<SemverConfig>> {
    match path {
        Some(path) => SemverConfig::load_file(path).map(Some),
        None => SemverConfig::load_from_cwd(),
    }
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_ref())?;
    let settings = Settings::resolve(config.as_ref(), args.format);
    log::debug!("Using {:?}", settings);

    match args.command {
        Commands::Validate(args) => validate::execute(args, &settings),
        Commands::Compare(args) => compare::execute(args, &settings),
        Commands::Sort(args) => sort::execute(args, &settings),
        Commands::Highest(args) => sort::execute_highest(args, &settings),
        Commands::Bump(args) => bump::execute(args, &settings),
        Commands::Set(args) => bump::execute_set(args, &settings),
        Commands::Inspect(args) => inspect::execute(args, &settings),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
