//! Strict parsers for the form's time-of-day and duration strings.
//!
//! Schedule entries use 24-hour `HH:MM`; the retry interval uses
//! `HH:MM:SS`. Both require two digits per component, so `9:30` is
//! rejected even though chrono would accept it.

use std::sync::OnceLock;

use chrono::{Duration, NaiveTime};
use regex::Regex;

use crate::error::CoreError;

fn clock_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("pattern is valid")
    })
}

fn retry_interval_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9])$").expect("pattern is valid")
    })
}

/// Parse a strict 24-hour `HH:MM` string.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, CoreError> {
    if !clock_time_re().is_match(s) {
        return Err(CoreError::Validation(format!(
            "Invalid time '{s}'. Expected 24-hour HH:MM"
        )));
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|e| CoreError::Validation(format!("Invalid time '{s}': {e}")))
}

/// Parse a strict `HH:MM:SS` retry interval into a duration.
pub fn parse_retry_interval(s: &str) -> Result<Duration, CoreError> {
    if !retry_interval_re().is_match(s) {
        return Err(CoreError::Validation(format!(
            "Invalid retry interval '{s}'. Expected HH:MM:SS"
        )));
    }
    let t = NaiveTime::parse_from_str(s, "%H:%M:%S")
        .map_err(|e| CoreError::Validation(format!("Invalid retry interval '{s}': {e}")))?;
    Ok(t.signed_duration_since(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- parse_clock_time --

    #[test]
    fn clock_time_accepts_valid_times() {
        assert_eq!(
            parse_clock_time("09:00").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            parse_clock_time("00:00").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_clock_time("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn clock_time_requires_two_digits() {
        assert!(parse_clock_time("9:30").is_err());
        assert!(parse_clock_time("09:5").is_err());
    }

    #[test]
    fn clock_time_rejects_out_of_range() {
        assert!(parse_clock_time("24:00").is_err());
        assert!(parse_clock_time("12:60").is_err());
    }

    #[test]
    fn clock_time_rejects_garbage() {
        assert!(parse_clock_time("").is_err());
        assert!(parse_clock_time("noon").is_err());
        assert!(parse_clock_time("09:00:00").is_err());
    }

    // -- parse_retry_interval --

    #[test]
    fn retry_interval_accepts_valid_durations() {
        assert_eq!(
            parse_retry_interval("00:05:00").unwrap(),
            Duration::minutes(5)
        );
        assert_eq!(
            parse_retry_interval("01:30:15").unwrap(),
            Duration::hours(1) + Duration::minutes(30) + Duration::seconds(15)
        );
        assert_eq!(
            parse_retry_interval("23:59:59").unwrap(),
            Duration::seconds(23 * 3600 + 59 * 60 + 59)
        );
    }

    #[test]
    fn retry_interval_requires_two_digits() {
        assert!(parse_retry_interval("1:00:00").is_err());
        assert!(parse_retry_interval("01:0:00").is_err());
    }

    #[test]
    fn retry_interval_rejects_out_of_range() {
        assert!(parse_retry_interval("24:00:00").is_err());
        assert!(parse_retry_interval("00:60:00").is_err());
        assert!(parse_retry_interval("00:00:60").is_err());
    }

    #[test]
    fn retry_interval_rejects_missing_seconds() {
        assert!(parse_retry_interval("00:05").is_err());
    }
}
