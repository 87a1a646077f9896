//! Parsing for layout files.
//!
//! This module turns raw layout documents (files, stdin or in-memory
//! buffers) into the canonical `Layout` model.

pub mod layout;

// Re-export commonly used functions
pub use layout::{parse_layout, read_layout_file, LayoutError, LayoutSyntax};
