use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "semver.toml";

/// The semver configuration file structure (semver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemverConfig {
    /// Output configuration
    pub output: OutputConfig,

    /// Sort configuration
    pub sort: SortConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: text or json
    pub format: OutputFormat,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Default order for `semver sort`
    pub order: SortOrder,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Effective settings after applying command-line overrides to the file
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub sort_order: SortOrder,
}

impl Settings {
    pub fn resolve(config: Option<&SemverConfig>, format: Option<OutputFormat>) -> Self {
        let defaults = SemverConfig::default();
        let config = config.unwrap_or(&defaults);
        Settings {
            format: format.unwrap_or(config.output.format),
            sort_order: config.sort.order,
        }
    }
}

impl SemverConfig {
    /// Load configuration from semver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                return Self::load_file(&config_path).map(Some);
            }

            // Reached filesystem root, no config found
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Load an explicit configuration file
    pub fn load_file(path: &Path) -> Result<Self> {
        log::debug!("Reading {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SemverConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }
}
