//! Timestamp handling for on-disk records.
//!
//! All stores record timestamps as `YYYY-MM-DD HH:MM:SS` in local time. This
//! module provides the shared format, a `now()` that is exact under that
//! format (sub-second precision is dropped), and serde functions for use with
//! `#[serde(with = "hotelier_core::timestamp")]`.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{self, Deserialize, Deserializer, Serializer};

/// The wire format for all stored timestamps.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The current local time, truncated to whole seconds.
#[must_use]
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Serialize a timestamp in the wire format.
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(FORMAT).to_string())
}

/// Deserialize a timestamp from the wire format.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_matches_store_layout() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        assert_eq!(dt.format(FORMAT).to_string(), "2024-03-09 14:05:07");
    }

    #[test]
    fn test_now_has_no_subsecond_precision() {
        assert_eq!(now().nanosecond(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(NaiveDateTime::parse_from_str("yesterday", FORMAT).is_err());
    }
}
