//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_CONFIG_DIR_NAME, CONFIG_DIR_ENV};
use crate::convert::{Format, RenderOptions};

/// Log levels accepted in the `[logging]` section.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Conversion output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `convert` is run without `--format`
    #[serde(default = "default_format")]
    pub default_format: Format,
    /// Indent keymeow JSON output
    #[serde(default)]
    pub pretty: bool,
}

fn default_format() -> Format {
    Format::Keymeow
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            pretty: false,
        }
    }
}

impl OutputConfig {
    /// Render options derived from these preferences.
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            pretty: self.pretty,
        }
    }
}

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter (overridden by `RUST_LOG` and `--verbose`)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
///
/// # Validation Rules
///
/// - `logging.level` must be one of error, warn, info, debug, trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `SLFCONV_CONFIG_DIR` takes precedence; otherwise:
    /// - Linux: `~/.config/slfconv/`
    /// - macOS: `~/Library/Application Support/slfconv/`
    /// - Windows: `%APPDATA%\slfconv\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }
}
