//! Convert command for writing a layout in analyzer formats.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::convert::{self, Format, RenderOptions};
use crate::models::Layout;
use crate::services::LayoutService;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Convert a layout to genkey, oxeylyzer or keymeow format
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Path to layout JSON file ("-" reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output format: genkey, oxeylyzer, keymeow, or all (defaults to config)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write output into this directory as <layout_name><extension>
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Indent keymeow JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Which formats a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    One(Format),
    All,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e:#}");
            Config::default()
        });

        let selection = self.selection(&config)?;

        let layout = LayoutService::load(&self.layout)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e:#}")))?;

        let mut options = config.output.render_options();
        options.pretty |= self.pretty;

        match selection {
            Selection::One(format) => self.convert_one(&layout, format, &options),
            Selection::All => self.convert_all(&layout, &options),
        }
    }

    fn selection(&self, config: &Config) -> CliResult<Selection> {
        let selection = match self.format.as_deref() {
            None => Selection::One(config.output.default_format),
            Some(s) if s.eq_ignore_ascii_case("all") => Selection::All,
            Some(s) => Selection::One(s.parse::<Format>().map_err(|_| {
                CliError::validation(format!(
                    "Invalid format '{s}'. Must be 'genkey', 'oxeylyzer', 'keymeow', or 'all'"
                ))
            })?),
        };

        if selection == Selection::All && self.output.is_some() {
            return Err(CliError::validation(
                "--output writes a single file; use --out-dir with --format all",
            ));
        }

        Ok(selection)
    }

    fn convert_one(&self, layout: &Layout, format: Format, options: &RenderOptions) -> CliResult<()> {
        let rendered = convert::render(layout, format, options)?;

        if let Some(path) = self.destination(layout, format) {
            LayoutService::write_output(&path, &rendered)
                .map_err(|e| CliError::io(format!("Failed to write output: {e:#}")))?;
            println!("✓ Wrote {} output to: {}", format, path.display());
        } else {
            write_stdout(&rendered)?;
        }

        Ok(())
    }

    fn convert_all(&self, layout: &Layout, options: &RenderOptions) -> CliResult<()> {
        let mut converted = 0;
        let mut failures = Vec::new();

        for format in Format::ALL {
            let rendered = match convert::render(layout, format, options) {
                Ok(rendered) => rendered,
                Err(e) => {
                    let err = CliError::from(e);
                    eprintln!("⚠ Skipped {format}: {err}");
                    failures.push(err);
                    continue;
                }
            };

            if let Some(path) = self.destination(layout, format) {
                LayoutService::write_output(&path, &rendered)
                    .map_err(|e| CliError::io(format!("Failed to write output: {e:#}")))?;
                println!("✓ Wrote {} output to: {}", format, path.display());
            } else {
                write_stdout(&format!("# {format}\n{rendered}\n"))?;
            }
            converted += 1;
        }

        if converted == 0 {
            return Err(failures
                .pop()
                .unwrap_or_else(|| CliError::validation("No formats could be produced")));
        }

        Ok(())
    }

    fn destination(&self, layout: &Layout, format: Format) -> Option<PathBuf> {
        if let Some(path) = &self.output {
            return Some(path.clone());
        }
        self.out_dir
            .as_ref()
            .map(|dir| LayoutService::output_path(dir, layout, format))
    }
}

fn write_stdout(text: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| CliError::io(format!("Failed to write to stdout: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: Option<&str>) -> ConvertArgs {
        ConvertArgs {
            layout: PathBuf::from("layout.json"),
            format: format.map(str::to_string),
            output: None,
            out_dir: None,
            pretty: false,
        }
    }

    #[test]
    fn test_selection_defaults_to_config() {
        let mut config = Config::default();
        config.output.default_format = Format::Oxeylyzer;
        assert_eq!(
            args(None).selection(&config).unwrap(),
            Selection::One(Format::Oxeylyzer)
        );
    }

    #[test]
    fn test_selection_parses_format() {
        let config = Config::default();
        assert_eq!(
            args(Some("genkey")).selection(&config).unwrap(),
            Selection::One(Format::Genkey)
        );
        assert_eq!(args(Some("ALL")).selection(&config).unwrap(), Selection::All);
    }

    #[test]
    fn test_selection_rejects_unknown_format() {
        let err = args(Some("klc")).selection(&Config::default()).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.message.contains("Invalid format 'klc'"));
    }

    #[test]
    fn test_selection_rejects_all_with_single_output() {
        let mut a = args(Some("all"));
        a.output = Some(PathBuf::from("out.txt"));
        assert!(a.selection(&Config::default()).is_err());
    }

    #[test]
    fn test_destination() {
        let layout = Layout::new("My Layout");
        let mut a = args(Some("genkey"));
        assert_eq!(a.destination(&layout, Format::Genkey), None);

        a.out_dir = Some(PathBuf::from("/tmp/out"));
        assert_eq!(
            a.destination(&layout, Format::Genkey),
            Some(PathBuf::from("/tmp/out/my_layout.genkey"))
        );
    }
}
