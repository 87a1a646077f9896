//! Formats command for listing supported output formats.

use crate::cli::common::{CliError, CliResult};
use crate::convert::Format;
use clap::Args;
use serde::Serialize;

/// List supported output formats
#[derive(Debug, Clone, Args)]
pub struct FormatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct FormatOutput {
    name: Format,
    extension: &'static str,
    description: &'static str,
}

fn format_entries() -> Vec<FormatOutput> {
    Format::ALL
        .into_iter()
        .map(|format| FormatOutput {
            name: format,
            extension: format.extension(),
            description: format.description(),
        })
        .collect()
}

impl FormatsArgs {
    /// Execute the formats command
    pub fn execute(&self) -> CliResult<()> {
        let entries = format_entries();

        if self.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            for entry in &entries {
                println!(
                    "{:<10} {:<14} {}",
                    entry.name, entry.extension, entry.description
                );
            }
        }

        Ok(())
    }
}
