//! Canonical layout data structure.

use crate::models::{timestamp, Finger, Key};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A keyboard layout as stored in the canonical JSON file.
///
/// The key collection is unordered: `row`/`col` on each key define its
/// position. A `Layout` is never mutated by a converter; converters that need
/// a particular key order work on their own view of `keys`.
///
/// # Decoding
///
/// - `created`/`modified` accept RFC 3339 strings or Unix epoch seconds
/// - `creation_time` and `primary_boards` are accepted as older field names
/// - every field other than `name` and `keys` is optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Layout name (e.g., "QWERTY")
    pub name: String,
    /// Numeric id of the owning account
    #[serde(default)]
    pub owner: i64,
    /// Author display name
    #[serde(default)]
    pub author: String,
    /// Provenance URL
    #[serde(default)]
    pub link: String,
    /// Creation timestamp
    #[serde(default = "timestamp::epoch", with = "timestamp", alias = "creation_time")]
    pub created: DateTime<Utc>,
    /// Last modification timestamp
    #[serde(default = "timestamp::epoch", with = "timestamp")]
    pub modified: DateTime<Utc>,
    /// Compatible physical keyboards
    #[serde(default, alias = "primary_boards")]
    pub boards: Vec<String>,
    /// Keys in no particular order
    pub keys: Vec<Key>,
}

impl Layout {
    /// Creates an empty layout with epoch timestamps.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: 0,
            author: String::new(),
            link: String::new(),
            created: timestamp::epoch(),
            modified: timestamp::epoch(),
            boards: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Replaces the key collection.
    #[must_use]
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys = keys.into_iter().collect();
        self
    }

    /// Number of keys in the layout.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Counts the keys assigned to each finger, indexed by ordinal.
    #[must_use]
    pub fn finger_counts(&self) -> [usize; Finger::COUNT] {
        let mut counts = [0; Finger::COUNT];
        for key in &self.keys {
            counts[usize::from(key.finger.ordinal())] += 1;
        }
        counts
    }

    /// Returns true if any key is pressed with a thumb.
    #[must_use]
    pub fn has_thumb_keys(&self) -> bool {
        self.keys.iter().any(|key| key.finger.is_thumb())
    }
}
