//! Event Date Parsing
//!
//! Accepted inputs:
//! - RFC 3339 (`2025-01-01T18:30:00-03:00`, `2025-01-01T21:30:00Z`)
//! - naive date-time (`2025-01-01T18:30:00`, `2025-01-01 18:30:00.250`), read as UTC
//! - date only (`2025-01-01`), read as UTC midnight

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{EventError, EventResult};

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a client-supplied event date
pub fn parse_event_date(input: &str) -> EventResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or(EventError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_only_is_utc_midnight() {
        let parsed = parse_event_date("2025-01-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rfc3339_offsets_normalized() {
        let parsed = parse_event_date("2025-01-01T18:30:00-03:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 1, 21, 30, 0).unwrap());

        let parsed = parse_event_date("2025-01-01T21:30:00.000Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 1, 21, 30, 0).unwrap());
    }

    #[test]
    fn test_naive_date_time() {
        let expected = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        assert_eq!(parse_event_date("2025-06-15T09:00:00").unwrap(), expected);
        assert_eq!(parse_event_date("2025-06-15 09:00:00").unwrap(), expected);
    }

    #[test]
    fn test_invalid_dates() {
        for input in ["", "tomorrow", "2025-13-01", "2025-02-30", "01/01/2025"] {
            assert!(
                matches!(parse_event_date(input), Err(EventError::InvalidDate)),
                "{input}"
            );
        }
    }
}
