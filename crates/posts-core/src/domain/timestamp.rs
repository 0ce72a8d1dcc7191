//! Store timestamp decoding.
//!
//! `timestamptz` columns arrive as RFC 3339 with an offset. `timestamp`
//! columns arrive without one and are read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de::Error};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_offset_timestamp_is_normalized_to_utc() {
        let ts = parse("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_timestamp_is_read_as_utc() {
        let ts = parse("2024-05-01T10:00:00.123456").unwrap();
        assert_eq!(ts.timestamp_subsec_micros(), 123_456);
        assert_eq!(
            ts.with_nanosecond(0).unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
        assert!(parse("2024-05-01 10:00:00").is_some());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse("yesterday").is_none());
        assert!(parse("").is_none());
    }
}
