//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use slfconv::models::{Finger, Key, Layout};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory holding checked-in layout files.
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// Path to a checked-in data file.
pub fn data_file(name: &str) -> PathBuf {
    data_dir().join(name)
}

/// Reads a checked-in data file as text.
pub fn read_data_file(name: &str) -> String {
    fs::read_to_string(data_file(name))
        .unwrap_or_else(|e| panic!("Failed to read test data {name}: {e}"))
}

/// Touch-typing finger for each column of a 10-column block.
pub const COLUMN_FINGERS: [Finger; 10] = [
    Finger::LP,
    Finger::LR,
    Finger::LM,
    Finger::LI,
    Finger::LI,
    Finger::RI,
    Finger::RI,
    Finger::RM,
    Finger::RR,
    Finger::RP,
];

/// Creates a layout from rows of characters using column-based fingering.
///
/// Row `r`, column `c` of `rows` becomes a key at (r, c).
#[allow(clippy::cast_possible_truncation)]
pub fn layout_from_rows(name: &str, rows: &[&str]) -> Layout {
    let mut keys = Vec::new();
    for (row, chars) in rows.iter().enumerate() {
        for (col, c) in chars.chars().enumerate() {
            keys.push(Key::new(c, row as u8, col as u8, COLUMN_FINGERS[col % 10]));
        }
    }
    Layout::new(name).with_author("Test Suite").with_keys(keys)
}

/// Standard QWERTY, 3x10, no thumb keys.
pub fn qwerty_layout() -> Layout {
    layout_from_rows("QWERTY", &["qwertyuiop", "asdfghjkl;", "zxcvbnm,./"])
}

/// Writes a layout to a temp directory as JSON.
///
/// # Returns
/// A tuple of (layout file path, temp dir guard)
pub fn create_temp_layout_file(layout: &Layout) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("layout.json");
    let json = serde_json::to_string_pretty(layout).expect("Failed to serialize layout");
    fs::write(&path, json).expect("Failed to write layout file");
    (path, temp_dir)
}

/// Writes raw text to a file in a new temp directory.
pub fn create_temp_file(name: &str, contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (path, temp_dir)
}

/// Path to the slfconv binary
pub fn slfconv_bin() -> &'static str {
    env!("CARGO_BIN_EXE_slfconv")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share config between them.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new(slfconv_bin());
    cmd.env("SLFCONV_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}
