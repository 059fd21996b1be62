//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use chrono::{DateTime, Duration, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// Now shifted by a whole number of days (negative for the past).
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    now_utc() + Duration::days(days)
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_then_parse_keeps_instant() {
        let now = now_utc();
        let parsed = parse_utc(&format_time(now)).unwrap();
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_days_from_now_direction() {
        let now = now_utc();
        assert!(days_from_now(2) > now);
        assert!(days_from_now(-1) < now);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_utc("next tuesday").is_err());
    }
}
