//! Finger assignments for keys.
//!
//! Fingers are ordered anatomically from the left pinky to the right pinky,
//! with both thumbs in the middle. The ordinal of each variant is part of the
//! interchange formats (genkey finger indices, integer-encoded JSON), so the
//! declaration order must never change.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the ten physical fingers that can operate a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Finger {
    /// Left pinky
    #[default]
    LP,
    /// Left ring
    LR,
    /// Left middle
    LM,
    /// Left index
    LI,
    /// Left thumb
    LT,
    /// Right thumb
    RT,
    /// Right index
    RI,
    /// Right middle
    RM,
    /// Right ring
    RR,
    /// Right pinky
    RP,
}

/// Which hand a finger belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    /// Left hand
    Left,
    /// Right hand
    Right,
}

impl Finger {
    /// Number of fingers.
    pub const COUNT: usize = 10;

    /// All fingers in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::LP,
        Self::LR,
        Self::LM,
        Self::LI,
        Self::LT,
        Self::RT,
        Self::RI,
        Self::RM,
        Self::RR,
        Self::RP,
    ];

    /// Returns the canonical symbolic name ("LP", "RT", ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LP => "LP",
            Self::LR => "LR",
            Self::LM => "LM",
            Self::LI => "LI",
            Self::LT => "LT",
            Self::RT => "RT",
            Self::RI => "RI",
            Self::RM => "RM",
            Self::RR => "RR",
            Self::RP => "RP",
        }
    }

    /// Returns the ordinal (0 for LP through 9 for RP).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a finger by ordinal.
    #[must_use]
    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Returns true for the two thumb fingers.
    #[must_use]
    pub const fn is_thumb(self) -> bool {
        matches!(self, Self::LT | Self::RT)
    }

    /// Returns the hand this finger belongs to.
    #[must_use]
    pub const fn hand(self) -> Hand {
        if (self as u8) < (Self::RT as u8) {
            Hand::Left
        } else {
            Hand::Right
        }
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Finger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|finger| finger.name() == s)
            .ok_or_else(|| format!("{s} is not a valid finger"))
    }
}

impl Serialize for Finger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Accepts an ordinal integer or a symbolic name.
struct FingerVisitor;

impl<'de> Visitor<'de> for FingerVisitor {
    type Value = Finger;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a finger ordinal (0-9) or finger name (LP, LR, ..., RP)")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Finger, E> {
        Finger::from_ordinal(v)
            .ok_or_else(|| E::custom(format!("{v} is not a valid finger ordinal")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Finger, E> {
        u64::try_from(v)
            .ok()
            .and_then(Finger::from_ordinal)
            .ok_or_else(|| E::custom(format!("{v} is not a valid finger ordinal")))
    }

    // Some decoders (json5) can hand whole numbers over as floats.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Finger, E> {
        if v.fract() == 0.0 && v >= 0.0 {
            if let Some(finger) = Finger::from_ordinal(v as u64) {
                return Ok(finger);
            }
        }
        Err(E::custom(format!("{v} is not a valid finger ordinal")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Finger, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Finger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FingerVisitor)
    }
}

/// Serde adapter for fields that only accept the symbolic finger name.
///
/// Keymeow documents never carry ordinals, so an integer there is an error.
pub mod by_name {
    use super::Finger;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes a list of fingers as names.
    pub fn serialize<S: Serializer>(fingers: &[Finger], serializer: S) -> Result<S::Ok, S::Error> {
        fingers.serialize(serializer)
    }

    /// Deserializes a list of finger names.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Finger>, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names
            .iter()
            .map(|name| name.parse().map_err(serde::de::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_ordinal_order() {
        for (idx, finger) in Finger::ALL.iter().enumerate() {
            assert_eq!(usize::from(finger.ordinal()), idx);
            assert_eq!(Finger::from_ordinal(idx as u64), Some(*finger));
        }
        assert_eq!(Finger::from_ordinal(10), None);
    }

    #[test]
    fn test_names_round_trip_and_are_unique() {
        for finger in Finger::ALL {
            assert_eq!(finger.name().parse::<Finger>(), Ok(finger));
            assert_eq!(finger.to_string(), finger.name());
        }
        let mut names: Vec<_> = Finger::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Finger::COUNT);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "XX".parse::<Finger>().unwrap_err();
        assert_eq!(err, "XX is not a valid finger");
        assert!("lp".parse::<Finger>().is_err());
    }

    #[test]
    fn test_thumbs_and_hands() {
        let thumbs: Vec<_> = Finger::ALL.into_iter().filter(|f| f.is_thumb()).collect();
        assert_eq!(thumbs, vec![Finger::LT, Finger::RT]);
        assert_eq!(Finger::LT.hand(), Hand::Left);
        assert_eq!(Finger::RT.hand(), Hand::Right);
        assert_eq!(Finger::LI.hand(), Hand::Left);
        assert_eq!(Finger::RP.hand(), Hand::Right);
    }

    #[test]
    fn test_deserialize_from_ordinal() {
        let finger: Finger = serde_json::from_str("6").unwrap();
        assert_eq!(finger, Finger::RI);
    }

    #[test]
    fn test_deserialize_from_name() {
        let finger: Finger = serde_json::from_str("\"RM\"").unwrap();
        assert_eq!(finger, Finger::RM);
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        let err = serde_json::from_str::<Finger>("12").unwrap_err();
        assert!(err.to_string().contains("12 is not a valid finger ordinal"));

        let err = serde_json::from_str::<Finger>("-1").unwrap_err();
        assert!(err.to_string().contains("-1 is not a valid finger ordinal"));

        let err = serde_json::from_str::<Finger>("\"thumb\"").unwrap_err();
        assert!(err.to_string().contains("thumb is not a valid finger"));

        assert!(serde_json::from_str::<Finger>("true").is_err());
    }

    #[test]
    fn test_serialize_as_name() {
        assert_eq!(serde_json::to_string(&Finger::LT).unwrap(), "\"LT\"");
    }

    #[test]
    fn test_by_name_rejects_ordinals() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(with = "by_name")]
            finger: Vec<Finger>,
        }

        let ok: Wrapper = serde_json::from_str(r#"{"finger":["RR"]}"#).unwrap();
        assert_eq!(ok.finger, vec![Finger::RR]);
        assert!(serde_json::from_str::<Wrapper>(r#"{"finger":[8]}"#).is_err());
    }
}
