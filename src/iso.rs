//! ISO-8601 timestamp formatting shared by the JSON dialects.

use chrono::{NaiveDateTime, ParseError, Timelike};

/// Whole-second format used by summaries, on both the encode and decode side.
pub const SUMMARY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const MICROSECOND_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS`, appending `.ffffff` only when
/// the timestamp has a non-zero microsecond part.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use obs_interchange::iso::isoformat;
///
/// let dt = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(6, 30, 0).unwrap();
/// assert_eq!(isoformat(&dt), "2020-01-01T06:30:00");
///
/// let dt = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_micro_opt(6, 30, 0, 250).unwrap();
/// assert_eq!(isoformat(&dt), "2020-01-01T06:30:00.000250");
/// ```
pub fn isoformat(dt: &NaiveDateTime) -> String {
    if dt.nanosecond() / 1_000 == 0 {
        dt.format(SUMMARY_DATE_FORMAT).to_string()
    } else {
        dt.format(MICROSECOND_DATE_FORMAT).to_string()
    }
}

/// Formats a timestamp in the whole-second summary format, dropping any
/// sub-second part.
pub fn format_seconds(dt: &NaiveDateTime) -> String {
    dt.format(SUMMARY_DATE_FORMAT).to_string()
}

/// Parses a timestamp in exactly the whole-second summary format.
///
/// Fractional seconds and timezone designators are rejected.
pub fn parse_seconds(s: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(s, SUMMARY_DATE_FORMAT)
}
