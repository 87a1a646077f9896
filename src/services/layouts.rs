//! Layout file I/O service.
//!
//! This module centralizes loading layout files and writing converted
//! output, providing consistent error context for the CLI.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::Format;
use crate::{models::Layout, parser};

/// Service for layout file I/O operations.
pub struct LayoutService;

impl LayoutService {
    /// Loads a layout from a JSON or JSON5 file, or stdin when `path` is `-`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use slfconv::services::LayoutService;
    ///
    /// let layout = LayoutService::load(Path::new("qwerty.json"))?;
    /// println!("{} has {} keys", layout.name, layout.key_count());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Layout> {
        parser::read_layout_file(path)
            .with_context(|| format!("Failed to load layout from {}", path.display()))
    }

    /// Writes converted output to a file.
    ///
    /// This performs an atomic write using a temp file + rename pattern so a
    /// failed conversion run never leaves a truncated output file behind.
    /// Missing parent directories are created.
    pub fn write_output(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }

        let file_name = path
            .file_name()
            .context("Output path has no file name")?
            .to_string_lossy();
        let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp file to {}", path.display())
        })?;

        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
        Ok(())
    }

    /// Builds the output path for a layout in `dir`: `<sanitized name><extension>`.
    #[must_use]
    pub fn output_path(dir: &Path, layout: &Layout, format: Format) -> PathBuf {
        dir.join(format!(
            "{}{}",
            sanitize_filename(&layout.name),
            format.extension()
        ))
    }
}

/// Sanitizes a layout name for use as a filename.
///
/// Replaces problematic characters with underscores and converts to lowercase.
/// An empty name becomes `layout`.
///
/// # Examples
///
/// ```
/// # use slfconv::services::layouts::sanitize_filename;
/// assert_eq!(sanitize_filename("My Layout"), "my_layout");
/// assert_eq!(sanitize_filename("Layout/Name:Test"), "layout_name_test");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "layout".to_string();
    }
    trimmed
        .replace(['/', '\\', ':', ' ', '*', '?', '"', '<', '>', '|'], "_")
        .to_lowercase()
}
