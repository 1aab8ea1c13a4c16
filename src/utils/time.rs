//! Time utilities: parsing shift instants and computing hour spans.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Deserializer};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Naive layouts accepted on the command line and in batch files.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a shift instant.
///
/// Naive forms are kept as-is; RFC 3339 input with an offset is normalized
/// to UTC.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}

pub fn parse_datetime_arg(s: &str) -> AppResult<NaiveDateTime> {
    parse_datetime(s).ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    input.map(|s| parse_datetime_arg(s)).transpose()
}

/// Serde adapter so batch rows accept the same layouts as the CLI.
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time '{raw}'")))
}

/// Fractional hours of a duration, at second precision.
pub fn delta_hours(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 / SECONDS_PER_HOUR
}
