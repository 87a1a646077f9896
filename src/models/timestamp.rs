//! Timestamp encoding for layout files.
//!
//! Layout files come from different tools: some store RFC 3339 strings, others
//! store Unix epoch seconds. Both decode to `DateTime<Utc>`; encoding always
//! writes RFC 3339.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Returns the Unix epoch, used when a layout carries no timestamp.
#[must_use]
pub fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Formats a timestamp the way it is written to disk.
#[must_use]
pub fn format_rfc3339(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Serializes a timestamp as an RFC 3339 string.
pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_rfc3339(ts))
}

/// Deserializes a timestamp from an RFC 3339 string or epoch seconds.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    deserializer.deserialize_any(TimestampVisitor)
}

struct TimestampVisitor;

impl TimestampVisitor {
    fn from_seconds<E: de::Error>(secs: i64) -> Result<DateTime<Utc>, E> {
        Utc.timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| E::custom(format!("timestamp {secs} is out of range")))
    }
}

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 timestamp string or Unix epoch seconds")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::from_seconds(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v)
            .map_err(|_| E::custom(format!("timestamp {v} is out of range")))?;
        Self::from_seconds(secs)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() != 0.0 || !v.is_finite() {
            return Err(E::custom(format!("timestamp {v} is not a whole number of seconds")));
        }
        Self::from_seconds(v as i64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        DateTime::parse_from_rfc3339(v)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| E::custom(format!("invalid timestamp '{v}': {e}")))
    }
}
