//! Configuration management
//!
//! Optional settings for the command-line front end. The library functions
//! never read configuration.
//!
//! Configuration files are stored in platform-specific directories:
//! - macOS: `~/Library/Application Support/textcalc/config.yaml`
//! - Linux: `~/.config/textcalc/config.yaml`
//! - Windows: `%APPDATA%\textcalc\config.yaml`

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default tracing level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration
///
/// Persisted as YAML in the user's config directory. Every field has a
/// default, so a partial or empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed decimal places for numeric output; shortest form when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    /// Tracing level name ("error", "warn", "info", "debug", "trace")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location
    ///
    /// # Returns
    /// - `Ok(Config)` with the loaded configuration, or defaults if the file doesn't exist
    /// - `Err` if the file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    /// Returns an error if the file exists but is malformed or unreadable.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        Ok(config)
    }

    /// Saves the configuration to the default config file location
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let contents = serde_yaml::to_string(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Returns the platform-specific configuration file path
    ///
    /// Falls back to `~/.config/textcalc/config.yaml` if platform detection fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set (fallback case only).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "textcalc") {
            Ok(proj_dirs.config_dir().join("config.yaml"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/textcalc/config.yaml"))
        }
    }

    /// Parses `log_level` into a tracing level
    ///
    /// # Errors
    /// Returns an error naming the value if it is not a known level.
    pub fn log_level(&self) -> Result<tracing::Level> {
        self.log_level
            .parse::<tracing::Level>()
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.log_level))
    }
}
