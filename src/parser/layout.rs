//! Canonical layout file decoding.
//!
//! Layouts are JSON documents. Hand-edited files may use JSON5 (comments,
//! trailing commas, unquoted keys); the syntax is chosen from the file
//! extension. A failed decode never yields a partial layout.

use crate::models::Layout;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Path that reads the layout from standard input.
pub const STDIN_PATH: &str = "-";

/// Failure to obtain a `Layout` from bytes or a file.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Reading the file or stdin failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read ("-" for stdin)
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input is not a valid JSON layout.
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is not a valid JSON5 layout.
    #[error("invalid layout JSON5: {0}")]
    Json5(String),

    /// Input contained nothing but whitespace.
    #[error("layout input is empty")]
    Empty,
}

/// Syntax of a layout document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutSyntax {
    /// Strict JSON
    #[default]
    Json,
    /// JSON5
    Json5,
}

impl LayoutSyntax {
    /// Picks the syntax from a file extension; anything but `.json5` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json5") => Self::Json5,
            _ => Self::Json,
        }
    }
}

/// Decodes a layout from a byte buffer.
pub fn parse_layout(bytes: &[u8], syntax: LayoutSyntax) -> Result<Layout, LayoutError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(LayoutError::Empty);
    }

    match syntax {
        LayoutSyntax::Json => Ok(serde_json::from_slice(bytes)?),
        LayoutSyntax::Json5 => {
            let text =
                std::str::from_utf8(bytes).map_err(|e| LayoutError::Json5(e.to_string()))?;
            json5::from_str(text).map_err(|e| LayoutError::Json5(e.to_string()))
        }
    }
}

/// Reads and decodes a layout file, or stdin when `path` is `-`.
pub fn read_layout_file(path: &Path) -> Result<Layout, LayoutError> {
    let io_err = |source| LayoutError::Io {
        path: path.display().to_string(),
        source,
    };

    let bytes = if path == Path::new(STDIN_PATH) {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(io_err)?;
        buf
    } else {
        std::fs::read(path).map_err(io_err)?
    };

    let layout = parse_layout(&bytes, LayoutSyntax::from_path(path))?;
    tracing::debug!(
        path = %path.display(),
        name = %layout.name,
        keys = layout.key_count(),
        "decoded layout"
    );
    Ok(layout)
}
