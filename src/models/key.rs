//! Physical key definition.

use crate::models::Finger;
use serde::{Deserialize, Deserializer, Serialize};

/// A single physical key: the glyph it types, where it sits and which finger
/// presses it.
///
/// # Validation
///
/// - `char` is exactly one Unicode code point; multi-code-point strings are
///   rejected on decode instead of being truncated
/// - `row` and `col` are 0-based and may leave gaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    /// Character printed on the key
    #[serde(deserialize_with = "deserialize_single_char")]
    pub char: char,
    /// Row (0-based, top to bottom)
    pub row: u8,
    /// Column (0-based, left to right)
    pub col: u8,
    /// Finger assigned to this key
    pub finger: Finger,
}

impl Key {
    /// Creates a new key.
    #[must_use]
    pub const fn new(char: char, row: u8, col: u8, finger: Finger) -> Self {
        Self {
            char,
            row,
            col,
            finger,
        }
    }

    /// Returns the (row, col) position.
    #[must_use]
    pub const fn position(&self) -> (u8, u8) {
        (self.row, self.col)
    }
}

fn deserialize_single_char<'de, D: Deserializer<'de>>(deserializer: D) -> Result<char, D::Error> {
    let s = String::deserialize(deserializer)?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(serde::de::Error::custom(
            "key char must be a single character, got an empty string",
        )),
        (Some(_), Some(_)) => Err(serde::de::Error::custom(format!(
            "key char must be a single character, got '{s}' ({} code points)",
            s.chars().count()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_key_with_named_finger() {
        let key: Key =
            serde_json::from_str(r#"{"char":"q","row":0,"col":0,"finger":"LP"}"#).unwrap();
        assert_eq!(key, Key::new('q', 0, 0, Finger::LP));
    }

    #[test]
    fn test_decode_key_with_ordinal_finger() {
        let key: Key =
            serde_json::from_str(r#"{"char":"p","row":0,"col":9,"finger":9}"#).unwrap();
        assert_eq!(key.finger, Finger::RP);
        assert_eq!(key.position(), (0, 9));
    }

    #[test]
    fn test_decode_non_ascii_char() {
        let key: Key =
            serde_json::from_str(r#"{"char":"ö","row":1,"col":10,"finger":"RP"}"#).unwrap();
        assert_eq!(key.char, 'ö');
    }

    #[test]
    fn test_decode_rejects_multi_code_point_char() {
        let err = serde_json::from_str::<Key>(r#"{"char":"th","row":0,"col":0,"finger":0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("'th' (2 code points)"));

        // "e" followed by a combining acute accent
        let err =
            serde_json::from_str::<Key>("{\"char\":\"e\u{301}\",\"row\":0,\"col\":0,\"finger\":0}")
                .unwrap_err();
        assert!(err.to_string().contains("2 code points"));
    }

    #[test]
    fn test_decode_rejects_empty_char() {
        let err =
            serde_json::from_str::<Key>(r#"{"char":"","row":0,"col":0,"finger":0}"#).unwrap_err();
        assert!(err.to_string().contains("empty string"));
    }

    #[test]
    fn test_encode_char_as_string() {
        let json = serde_json::to_string(&Key::new(';', 1, 9, Finger::RP)).unwrap();
        assert_eq!(json, r#"{"char":";","row":1,"col":9,"finger":"RP"}"#);
    }
}
