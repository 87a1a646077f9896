//! Conversion from the canonical layout into analyzer formats.
//!
//! The grid formats (genkey, oxeylyzer) go through [`Matrix`]; keymeow
//! groups keys by finger directly. Every encoder is a pure function of the
//! layout and returns either the complete output or a [`ConversionError`].

pub mod genkey;
pub mod keymeow;
pub mod matrix;
pub mod oxeylyzer;

pub use keymeow::{KeymeowComponent, KeymeowLayout};
pub use matrix::{Matrix, MatrixKey};

use crate::models::Layout;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A layout that cannot be represented in the requested format.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Genkey needs exactly three rows.
    #[error("genkey only supports layouts with 3 rows")]
    GenkeyRowCount {
        /// Rows in the layout's matrix
        found: usize,
    },

    /// Genkey has no finger index for thumbs.
    #[error("genkey does not support thumbkeys")]
    GenkeyThumbKey {
        /// Row of the first thumb key
        row: usize,
        /// Column of the first thumb key
        col: usize,
    },

    /// Oxeylyzer needs exactly three rows of ten keys.
    #[error("oxeylyzer only supports 3x10 layouts")]
    OxeylyzerShape {
        /// Length of each matrix row
        row_widths: Vec<usize>,
    },

    /// Keymeow output could not be serialized.
    #[error("failed to encode keymeow output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ConversionError {
    /// Describes what was found, for diagnostics beyond the fixed message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::GenkeyRowCount { found } => Some(format!("layout has {found} rows")),
            Self::GenkeyThumbKey { row, col } => {
                Some(format!("thumb key at row {row}, column {col}"))
            }
            Self::OxeylyzerShape { row_widths } => Some(format!(
                "layout has {} rows with widths {:?}",
                row_widths.len(),
                row_widths
            )),
            Self::Encode(_) => None,
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Character grid plus finger-index grid, 3 rows, no thumbs
    Genkey,
    /// Bare 3x10 character grid
    Oxeylyzer,
    /// Keys grouped by finger, as JSON
    Keymeow,
}

impl Format {
    /// All formats.
    pub const ALL: [Self; 3] = [Self::Genkey, Self::Oxeylyzer, Self::Keymeow];

    /// Lowercase format name, as used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Genkey => "genkey",
            Self::Oxeylyzer => "oxeylyzer",
            Self::Keymeow => "keymeow",
        }
    }

    /// File extension for output files, including the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Genkey => ".genkey",
            Self::Oxeylyzer => ".oxey",
            Self::Keymeow => ".keymeow.json",
        }
    }

    /// One-line description of the format's constraints.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Genkey => "name, character grid and finger-index grid; 3 rows, no thumb keys",
            Self::Oxeylyzer => "bare character grid; exactly 3 rows of 10 keys",
            Self::Keymeow => "JSON with keys grouped by finger; any geometry",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("Invalid format '{s}'. Must be 'genkey', 'oxeylyzer', or 'keymeow'")
            })
    }
}

/// Output options that don't change what is encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Indent keymeow JSON
    pub pretty: bool,
}

/// Encodes a layout in the given format and returns the output text.
pub fn render(
    layout: &Layout,
    format: Format,
    options: &RenderOptions,
) -> Result<String, ConversionError> {
    tracing::debug!(layout = %layout.name, %format, "converting layout");

    let result = match format {
        Format::Genkey => genkey::encode(layout),
        Format::Oxeylyzer => oxeylyzer::encode(layout),
        Format::Keymeow => {
            let keymeow = keymeow::encode(layout);
            let json = if options.pretty {
                serde_json::to_string_pretty(&keymeow)?
            } else {
                serde_json::to_string(&keymeow)?
            };
            Ok(json + "\n")
        }
    };

    if let Err(err) = &result {
        tracing::debug!(
            layout = %layout.name,
            %format,
            detail = err.detail().as_deref().unwrap_or(""),
            "conversion rejected: {err}"
        );
    }
    result
}

/// Returns the formats a layout can be converted to.
#[must_use]
pub fn supported_formats(layout: &Layout) -> Vec<Format> {
    Format::ALL
        .into_iter()
        .filter(|format| match format {
            Format::Genkey => genkey::encode(layout).is_ok(),
            Format::Oxeylyzer => oxeylyzer::encode(layout).is_ok(),
            Format::Keymeow => true,
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_layouts::qwerty;
    use super::*;
    use crate::models::{Finger, Key};

    #[test]
    fn test_format_parse_and_display() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>(), Ok(format));
        }
        assert_eq!("GENKEY".parse::<Format>(), Ok(Format::Genkey));
        assert!("klc".parse::<Format>().is_err());
    }

    #[test]
    fn test_render_each_format() {
        let layout = qwerty();
        let options = RenderOptions::default();

        let genkey = render(&layout, Format::Genkey, &options).unwrap();
        assert!(genkey.starts_with("QWERTY\n"));

        let oxey = render(&layout, Format::Oxeylyzer, &options).unwrap();
        assert_eq!(oxey.lines().count(), 3);

        let keymeow = render(&layout, Format::Keymeow, &options).unwrap();
        assert_eq!(keymeow.lines().count(), 1);
        let decoded: KeymeowLayout = serde_json::from_str(&keymeow).unwrap();
        assert_eq!(decoded, keymeow::encode(&layout));
    }

    #[test]
    fn test_render_pretty_keymeow() {
        let options = RenderOptions { pretty: true };
        let out = render(&qwerty(), Format::Keymeow, &options).unwrap();
        assert!(out.lines().count() > 10);
        assert!(out.contains("\"name\": \"QWERTY\""));
    }

    #[test]
    fn test_supported_formats() {
        assert_eq!(supported_formats(&qwerty()), Format::ALL.to_vec());

        let mut with_thumb = qwerty();
        with_thumb.keys.push(Key::new(' ', 3, 4, Finger::LT));
        assert_eq!(supported_formats(&with_thumb), vec![Format::Keymeow]);
    }

    #[test]
    fn test_error_detail() {
        let err = ConversionError::OxeylyzerShape {
            row_widths: vec![10, 9],
        };
        assert_eq!(
            err.detail().as_deref(),
            Some("layout has 2 rows with widths [10, 9]")
        );
    }
}
