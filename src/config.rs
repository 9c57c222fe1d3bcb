//! Configuration file support for deporder.
//!
//! Provides YAML-based configuration through `deporder.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments into the final [`Settings`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::adapters::outbound::network::DEFAULT_REGISTRY_URL;
use crate::application::dto::{OutputFormat, DEFAULT_MAX_DEPTH};
use crate::cli::Args;
use crate::shared::error::DepOrderError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deporder.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub test_mode: Option<bool>,
    pub package_version: Option<String>,
    pub max_depth: Option<usize>,
    pub filter_substring: Option<String>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub expected_order: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML and that max_depth is a non-negative integer.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }
    if let Some(ref expected) = config.expected_order {
        for (i, name) in expected.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: expected_order[{}] must not be empty.\n\n\
                     💡 Hint: List package names in load order, one per entry.",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Loads the config named by `--config`, or discovers one in `dir`.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(dir),
    }
}

/// Final run settings after merging CLI flags, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub package_name: String,
    /// Registry base URL, or the adjacency-list path in test mode
    pub repository: String,
    pub test_mode: bool,
    pub package_version: Option<String>,
    pub max_depth: usize,
    pub filter_substring: String,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub expected_order: Option<Vec<String>>,
}

impl Settings {
    /// Merges `args` over `config` over defaults and validates the result.
    ///
    /// # Errors
    /// Returns `DepOrderError::Configuration` when no package name is set,
    /// or when test mode is on without a repository path.
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let package_name = args
            .package
            .clone()
            .or(config.package_name)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| DepOrderError::Configuration {
                message: "No package name given".to_string(),
                hint: format!(
                    "Pass --package <NAME> or set package_name in {}",
                    CONFIG_FILENAME
                ),
            })?;

        let test_mode = args.test_mode || config.test_mode.unwrap_or(false);
        let repository = match args.repository.clone().or(config.repository_url) {
            Some(repository) => repository,
            None if test_mode => {
                return Err(DepOrderError::Configuration {
                    message: "Test mode needs a dependency file".to_string(),
                    hint: "Pass --repository <PATH> pointing at a 'package: dep, dep' file"
                        .to_string(),
                }
                .into())
            }
            None => DEFAULT_REGISTRY_URL.to_string(),
        };

        let format = match (args.format, config.format) {
            (Some(format), _) => format,
            (None, Some(format)) => {
                OutputFormat::from_str(&format).map_err(|message| DepOrderError::Validation {
                    message,
                })?
            }
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            package_name,
            repository,
            test_mode,
            package_version: args
                .package_version
                .clone()
                .or(config.package_version)
                .filter(|v| !v.trim().is_empty()),
            max_depth: args
                .max_depth
                .or(config.max_depth)
                .unwrap_or(DEFAULT_MAX_DEPTH),
            filter_substring: args
                .filter
                .clone()
                .or(config.filter_substring)
                .unwrap_or_default(),
            output: args.output.clone().or(config.output),
            format,
            expected_order: args.expected.clone().or(config.expected_order),
        })
    }
}
