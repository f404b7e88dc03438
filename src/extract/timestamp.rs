// ABOUTME: Parsing and local rendering of runtime timestamps.
// ABOUTME: Treats the engine's zero time as absent.

use chrono::{DateTime, Datelike, Local, Utc};

/// Parse an RFC 3339 timestamp as reported by the engine.
///
/// Returns `None` for empty strings, unparseable strings and the zero time
/// (`0001-01-01T00:00:00Z`) the engine reports for never-started containers.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim()).ok()?;
    let utc = parsed.with_timezone(&Utc);
    (utc.year() > 1).then_some(utc)
}

/// Render a timestamp in the local timezone using the locale's date and time
/// representation.
pub fn to_local(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%c").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_nanosecond_precision() {
        let ts = parse_timestamp("2024-03-01T10:20:30.123456789Z").unwrap();
        assert_eq!(ts.timestamp(), 1_709_288_430);
    }

    #[test]
    fn parses_offsets() {
        let ts = parse_timestamp("2024-03-01T12:20:30+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap());
    }

    #[test]
    fn zero_time_is_absent() {
        assert!(parse_timestamp("0001-01-01T00:00:00Z").is_none());
    }

    #[test]
    fn garbage_is_absent() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn local_rendering_is_not_empty() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap();
        assert!(to_local(&ts).contains("2024"));
    }
}
