//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`CALCGEN_*`, nested keys split on `__`)
//! 3. Config file (`--config` path, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generated calculators.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Fallbacks applied when the matching `generate` flag is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Calculator kind: `basic` or `scientific`.
    pub kind: Option<String>,
    /// Author recorded in the generated script header.
    pub author: Option<String>,
    /// Output path for the generated script.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            kind: Some("basic".into()),
            author: None,
            output: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering sources over the built-in defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.  An explicit
    /// path must exist; the default location is optional and silently skipped
    /// when absent.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let defaults = config::Config::try_from(&Self::default()).map_err(|e| {
            CliError::ConfigError {
                message: format!("failed to seed default configuration: {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        let file_source = match config_file {
            Some(path) => config::File::from(path.clone()).required(true),
            None => config::File::from(Self::config_path()).required(false),
        };

        let merged = config::Config::builder()
            .add_source(defaults)
            .add_source(file_source)
            .add_source(config::Environment::with_prefix("CALCGEN").separator("__"))
            .build()
            .map_err(|e| CliError::ConfigError {
                message: format!("failed to load configuration: {e}"),
                source: Some(Box::new(e)),
            })?;

        merged
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("invalid configuration: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.calcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "calcgen", "calcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".calcgen.toml"))
    }
}
