//! Defines [`ObservationTime`] and the conversion of the external "no date"
//! marker.
//!
//! Observation stores mark records that have no meaningful date (station
//! constants such as coordinates or network name) with the placeholder
//! timestamp `1000-01-01T00:00:00`. Inside this crate that placeholder is
//! represented as [`ObservationTime::Unknown`]; the placeholder value itself
//! only appears when converting to or from the external representation.

use crate::iso::isoformat;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

const MARKER_YEAR: i32 = 1000;

/// The placeholder timestamp external stores use to mean "no date".
pub fn missing_date_marker() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(MARKER_YEAR, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Returns `true` if `dt` is the external "no date" placeholder.
pub fn is_missing_date_marker(dt: &NaiveDateTime) -> bool {
    dt.year() == MARKER_YEAR
        && dt.ordinal() == 1
        && dt.num_seconds_from_midnight() == 0
        && dt.nanosecond() == 0
}

/// The exact date of an observation.
///
/// Serializes as an ISO-8601 string for [`ObservationTime::At`] and as `null`
/// for [`ObservationTime::Unknown`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use obs_interchange::ObservationTime;
///
/// let marker = NaiveDate::from_ymd_opt(1000, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(ObservationTime::from_external(marker), ObservationTime::Unknown);
/// assert_eq!(ObservationTime::Unknown.to_external(), marker);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservationTime {
    /// The observation was taken at this (UTC) time.
    At(NaiveDateTime),
    /// The record carries a date, but it is the "no date" placeholder.
    Unknown,
}

impl ObservationTime {
    /// Converts a timestamp from the external representation, mapping the
    /// placeholder to [`ObservationTime::Unknown`].
    pub fn from_external(dt: NaiveDateTime) -> Self {
        if is_missing_date_marker(&dt) {
            ObservationTime::Unknown
        } else {
            ObservationTime::At(dt)
        }
    }

    /// Converts back to the external representation.
    pub fn to_external(self) -> NaiveDateTime {
        match self {
            ObservationTime::At(dt) => dt,
            ObservationTime::Unknown => missing_date_marker(),
        }
    }

    /// The timestamp, if known.
    pub fn datetime(self) -> Option<NaiveDateTime> {
        match self {
            ObservationTime::At(dt) => Some(dt),
            ObservationTime::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, ObservationTime::Unknown)
    }

    pub(crate) fn normalized(self) -> Self {
        match self {
            ObservationTime::At(dt) => Self::from_external(dt),
            ObservationTime::Unknown => ObservationTime::Unknown,
        }
    }
}

impl Serialize for ObservationTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ObservationTime::At(dt) => serializer.serialize_str(&isoformat(dt)),
            ObservationTime::Unknown => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationTime::At(dt) => write!(f, "{}", isoformat(dt)),
            ObservationTime::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .unwrap()
    }

    #[test]
    fn test_marker_detection() {
        assert!(is_missing_date_marker(&datetime(1000, 1, 1, 0, 0, 0)));
        assert!(!is_missing_date_marker(&datetime(1000, 1, 1, 0, 0, 1)));
        assert!(!is_missing_date_marker(&datetime(1000, 1, 2, 0, 0, 0)));
        assert!(!is_missing_date_marker(&datetime(2000, 1, 1, 0, 0, 0)));
        assert!(is_missing_date_marker(&missing_date_marker()));
    }

    #[test]
    fn test_external_conversion() {
        let dt = datetime(2020, 1, 1, 0, 0, 0);
        assert_eq!(ObservationTime::from_external(dt), ObservationTime::At(dt));
        assert_eq!(ObservationTime::At(dt).to_external(), dt);
        assert_eq!(
            ObservationTime::from_external(missing_date_marker()),
            ObservationTime::Unknown
        );
    }

    #[test]
    fn test_normalized_folds_marker() {
        assert_eq!(
            ObservationTime::At(missing_date_marker()).normalized(),
            ObservationTime::Unknown
        );
        let dt = datetime(1999, 12, 31, 23, 0, 0);
        assert_eq!(ObservationTime::At(dt).normalized(), ObservationTime::At(dt));
    }

    #[test]
    fn test_serialize() -> Result<(), serde_json::Error> {
        let dt = datetime(2020, 1, 1, 0, 0, 0);
        assert_eq!(
            serde_json::to_string(&ObservationTime::At(dt))?,
            "\"2020-01-01T00:00:00\""
        );
        assert_eq!(serde_json::to_string(&ObservationTime::Unknown)?, "null");
        Ok(())
    }
}
