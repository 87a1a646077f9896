//! Shared CLI result and exit-code types.

use crate::convert::ConversionError;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was read but is not acceptable (including unconvertible layouts)
    ValidationError = 1,
    /// File could not be read, decoded or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code to terminate with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation or conversion failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or decode failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ConversionError> for CliError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::Encode(e) => Self::io(format!("Failed to encode output: {e}")),
            other => match other.detail() {
                Some(detail) => Self::validation(format!("{other} ({detail})")),
                None => Self::validation(other.to_string()),
            },
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
