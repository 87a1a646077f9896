//! Keymeow structured format: keys grouped by finger.
//!
//! Unlike the grid formats, keymeow ignores row/column geometry except for
//! ordering. Within each finger, keys are listed column by column, top to
//! bottom, which approximates the order a finger sweeps across its reach.

use crate::models::finger::{self, Finger};
use crate::models::{Key, Layout};
use serde::{Deserialize, Serialize};

/// Keys assigned to one finger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymeowComponent {
    /// The finger, as a singleton list (keymeow allows shared components)
    #[serde(alias = "Finger", with = "finger::by_name")]
    pub finger: Vec<Finger>,
    /// Characters in column-then-row order
    #[serde(alias = "Keys")]
    pub keys: Vec<char>,
}

impl KeymeowComponent {
    fn empty(finger: Finger) -> Self {
        Self {
            finger: vec![finger],
            keys: Vec::with_capacity(12),
        }
    }
}

/// A layout in keymeow form.
///
/// Always holds exactly one component per finger, in ordinal order, even
/// for fingers with no keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymeowLayout {
    /// Layout name
    #[serde(alias = "Name")]
    pub name: String,
    /// Authors
    #[serde(alias = "Authors", default)]
    pub authors: Vec<String>,
    /// One component per finger
    #[serde(alias = "Components")]
    pub components: Vec<KeymeowComponent>,
}

impl KeymeowLayout {
    /// Returns the component for a finger, if present.
    #[must_use]
    pub fn component(&self, finger: Finger) -> Option<&KeymeowComponent> {
        self.components
            .iter()
            .find(|component| component.finger.first() == Some(&finger))
    }

    /// Total number of keys across all components.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.components.iter().map(|c| c.keys.len()).sum()
    }
}

/// Converts a layout into keymeow form.
///
/// The layout's key collection is left untouched; ordering happens on a
/// private list of references.
#[must_use]
pub fn encode(layout: &Layout) -> KeymeowLayout {
    let mut components: Vec<KeymeowComponent> =
        Finger::ALL.into_iter().map(KeymeowComponent::empty).collect();

    let mut ordered: Vec<&Key> = layout.keys.iter().collect();
    ordered.sort_by_key(|key| (key.col, key.row));

    for key in ordered {
        components[usize::from(key.finger.ordinal())]
            .keys
            .push(key.char);
    }

    let authors = if layout.author.is_empty() {
        Vec::new()
    } else {
        vec![layout.author.clone()]
    };

    KeymeowLayout {
        name: layout.name.clone(),
        authors,
        components,
    }
}
