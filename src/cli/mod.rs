//! CLI command handlers for slfconv.
//!
//! Each subcommand has an `Args` struct with an `execute` method returning
//! [`CliResult`], so `main` only maps errors to exit codes.

pub mod common;
pub mod config;
pub mod convert;
pub mod formats;
pub mod inspect;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use formats::FormatsArgs;
pub use inspect::InspectArgs;
