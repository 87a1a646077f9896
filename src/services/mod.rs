//! Service layer for file I/O.
//!
//! This module wraps parsing and output writing with consistent error
//! context and logging, so CLI commands stay thin.

pub mod layouts;

// Re-export commonly used types and functions
pub use layouts::LayoutService;
