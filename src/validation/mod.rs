//! Input validation for `metri_rust`.
//!
//! These routines validate user-supplied date/time strings and the `--last`
//! window and return structured validation errors without touching storage.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{MetriError, Result};

/// Parse a `--date` value in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `Validation` if the value is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| MetriError::validation("date", "must be YYYY-MM-DD"))
}

/// Parse a `--time` value in `HH:MM:SS` form.
///
/// # Errors
///
/// Returns `Validation` if the value is not a valid time of day.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|_| MetriError::validation("time", "must be HH:MM:SS"))
}

/// Parse a `--last` window like `7d` into a start date.
///
/// The window is a trailing run of N days inclusive of `today`, so the
/// start is `today - (N - 1)` days. The `d` suffix is case-insensitive.
///
/// # Errors
///
/// Returns `Validation` if the value is not `<N>d` with N >= 1, or if the
/// window would underflow the calendar.
pub fn parse_last_window(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    let malformed = || MetriError::validation("last", "must be in the form '<N>d', e.g. 7d");

    let raw = value.trim().to_ascii_lowercase();
    let Some(number) = raw.strip_suffix('d') else {
        return Err(malformed());
    };
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let days: i64 = number.parse().map_err(|_| malformed())?;
    if days < 1 {
        return Err(MetriError::validation("last", "must be >= 1"));
    }

    Duration::try_days(days - 1)
        .and_then(|window| today.checked_sub_signed(window))
        .ok_or_else(|| MetriError::validation("last", "window too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_accepts_iso_form() {
        assert_eq!(parse_date("2024-01-01").unwrap(), day(2024, 1, 1));
    }

    #[test]
    fn date_rejects_wrong_order_and_impossible_days() {
        assert!(parse_date("01-01-2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024/01/01").is_err());
    }

    #[test]
    fn time_accepts_full_form() {
        let time = parse_time("06:30:00").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
    }

    #[test]
    fn time_rejects_missing_seconds_and_bad_values() {
        assert!(parse_time("06:30").is_err());
        assert!(parse_time("25:00:00").is_err());
        assert!(parse_time("not a time").is_err());
    }

    #[test]
    fn last_7d_starts_six_days_earlier() {
        let start = parse_last_window("7d", day(2024, 3, 10)).unwrap();
        assert_eq!(start, day(2024, 3, 4));
    }

    #[test]
    fn last_1d_starts_today() {
        let start = parse_last_window("1d", day(2024, 3, 10)).unwrap();
        assert_eq!(start, day(2024, 3, 10));
    }

    #[test]
    fn last_suffix_is_case_insensitive() {
        let start = parse_last_window(" 7D ", day(2024, 3, 10)).unwrap();
        assert_eq!(start, day(2024, 3, 4));
    }

    #[test]
    fn last_rejects_zero_days() {
        let err = parse_last_window("0d", day(2024, 3, 10)).unwrap_err();
        assert!(err.to_string().contains(">= 1"));
    }

    #[test]
    fn last_rejects_malformed_windows() {
        for raw in ["7", "d", "x7d", "7.5d", "-3d", ""] {
            assert!(parse_last_window(raw, day(2024, 3, 10)).is_err(), "{raw}");
        }
    }

    #[test]
    fn last_rejects_windows_past_calendar_start() {
        assert!(parse_last_window("9000000000000000000d", day(2024, 3, 10)).is_err());
    }
}
