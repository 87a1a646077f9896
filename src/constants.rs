//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including config directory and environment variable names.

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR_NAME: &str = "slfconv";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "SLFCONV_CONFIG_DIR";
