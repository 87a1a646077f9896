//! Inspect command for summarizing a layout file.

use crate::cli::common::{CliError, CliResult};
use crate::convert::{self, Format, Matrix};
use crate::models::{timestamp, Finger, Hand, Layout};
use crate::services::LayoutService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show layout metadata, geometry and which formats it converts to
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to layout JSON file ("-" reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable layout summary
#[derive(Serialize, Debug)]
struct InspectOutput {
    name: String,
    author: String,
    owner: i64,
    link: String,
    created: String,
    modified: String,
    boards: Vec<String>,
    key_count: usize,
    thumb_keys: bool,
    geometry: GeometryOutput,
    fingers: Vec<FingerOutput>,
    supported_formats: Vec<Format>,
}

#[derive(Serialize, Debug)]
struct GeometryOutput {
    rows: usize,
    row_widths: Vec<usize>,
    holes: usize,
}

#[derive(Serialize, Debug)]
struct FingerOutput {
    finger: Finger,
    hand: Hand,
    keys: usize,
}

impl InspectOutput {
    fn build(layout: &Layout) -> Self {
        let matrix = Matrix::from_layout(layout);
        let counts = layout.finger_counts();

        Self {
            name: layout.name.clone(),
            author: layout.author.clone(),
            owner: layout.owner,
            link: layout.link.clone(),
            created: timestamp::format_rfc3339(&layout.created),
            modified: timestamp::format_rfc3339(&layout.modified),
            boards: layout.boards.clone(),
            key_count: layout.key_count(),
            thumb_keys: layout.has_thumb_keys(),
            geometry: GeometryOutput {
                rows: matrix.row_count(),
                row_widths: matrix.row_widths(),
                holes: matrix.hole_count(),
            },
            fingers: Finger::ALL
                .into_iter()
                .map(|finger| FingerOutput {
                    finger,
                    hand: finger.hand(),
                    keys: counts[usize::from(finger.ordinal())],
                })
                .collect(),
            supported_formats: convert::supported_formats(layout),
        }
    }
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let layout = LayoutService::load(&self.layout)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e:#}")))?;

        let summary = InspectOutput::build(&layout);

        if self.json {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            print_human_readable(&summary);
        }

        Ok(())
    }
}

fn print_human_readable(summary: &InspectOutput) {
    println!("Layout: {}", summary.name);
    if !summary.author.is_empty() {
        println!("  Author:   {}", summary.author);
    }
    if !summary.link.is_empty() {
        println!("  Link:     {}", summary.link);
    }
    println!("  Created:  {}", summary.created);
    println!("  Modified: {}", summary.modified);
    if !summary.boards.is_empty() {
        println!("  Boards:   {}", summary.boards.join(", "));
    }

    println!("\nGeometry:");
    println!("  Keys:       {}", summary.key_count);
    println!(
        "  Thumb keys: {}",
        if summary.thumb_keys { "yes" } else { "no" }
    );
    println!(
        "  Rows:       {} ({})",
        summary.geometry.rows,
        summary
            .geometry
            .row_widths
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Holes:      {}", summary.geometry.holes);

    println!("\nFingers:");
    for entry in &summary.fingers {
        println!("  {}: {}", entry.finger, entry.keys);
    }

    println!("\nFormats:");
    for format in Format::ALL {
        let mark = if summary.supported_formats.contains(&format) {
            "✓"
        } else {
            "✗"
        };
        println!("  {mark} {format}");
    }
}
