//! slfconv - keyboard layout format converter
//!
//! Reads a canonical JSON layout and writes it in genkey, oxeylyzer or
//! keymeow format.

use clap::{Parser, Subcommand};
use slfconv::cli::{CliResult, ConfigArgs, ConvertArgs, FormatsArgs, InspectArgs};
use slfconv::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// slfconv - convert keyboard layouts between analyzer formats
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a layout to another format
    Convert(ConvertArgs),
    /// Summarize a layout file
    Inspect(InspectArgs),
    /// List supported output formats
    Formats(FormatsArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Convert(args) => args.execute(),
            Self::Inspect(args) => args.execute(),
            Self::Formats(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

/// Initializes tracing on stderr so stdout carries only converted output.
///
/// `RUST_LOG` wins over `--verbose`, which wins over the configured level.
fn init_tracing(verbose: bool) {
    let (level, config_err) = match Config::load() {
        Ok(config) => (config.logging.level, None),
        Err(e) => (Config::default().logging.level, Some(e)),
    };
    let filter = if verbose { "debug".to_string() } else { level };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(e) = config_err {
        tracing::warn!("Failed to load config, using defaults: {e:#}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
