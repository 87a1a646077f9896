//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, LOG_LEVELS};
use crate::convert::Format;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Format used when convert is run without --format
    #[arg(long, value_name = "FORMAT", value_enum)]
    default_format: Option<Format>,

    /// Indent keymeow JSON output (true or false)
    #[arg(long, value_name = "BOOL")]
    pretty: Option<bool>,

    /// Default log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    output: OutputSection,
    logging: LoggingSection,
}

#[derive(Serialize, Debug)]
struct OutputSection {
    default_format: Format,
    pretty: bool,
}

#[derive(Serialize, Debug)]
struct LoggingSection {
    level: String,
}

impl ConfigOutput {
    fn from_config(config: &Config) -> Self {
        Self {
            config_file: Config::config_file_path()
                .ok()
                .map(|p| p.to_string_lossy().to_string()),
            output: OutputSection {
                default_format: config.output.default_format,
                pretty: config.output.pretty,
            },
            logging: LoggingSection {
                level: config.logging.level.clone(),
            },
        }
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let output = ConfigOutput::from_config(&config);

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.default_format.is_none() && self.pretty.is_none() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-format, --pretty, or --log-level",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Existing config unreadable, starting from defaults: {e:#}");
            Config::default()
        });

        if let Some(format) = self.default_format {
            config.output.default_format = format;
        }

        if let Some(pretty) = self.pretty {
            config.output.pretty = pretty;
        }

        if let Some(level) = &self.log_level {
            let level = level.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(CliError::validation(format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
            config.logging.level = level;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("Configuration:");
    if let Some(path) = &output.config_file {
        println!("  File: {path}");
    }
    println!();
    println!("Output:");
    println!("  Default format: {}", output.output.default_format);
    println!("  Pretty JSON:    {}", output.output.pretty);
    println!();
    println!("Logging:");
    println!("  Level: {}", output.logging.level);
}
