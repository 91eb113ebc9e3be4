//! Fixed-point geographic coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fixed-point units in one degree (five decimal places).
pub const UNITS_PER_DEGREE: i32 = 100_000;

const MAX_LATITUDE_UNITS: i32 = 90 * UNITS_PER_DEGREE;
const MAX_LONGITUDE_UNITS: i32 = 180 * UNITS_PER_DEGREE;

/// A latitude or longitude stored as an integer number of 1e-5 degree units.
///
/// Observation stores keep station coordinates in this scaled form so that two
/// stations compare equal exactly rather than within a floating point epsilon.
/// Use [`Coordinate::units`] for the integer encoding (the form that appears
/// in GeoJSON properties and in summaries) and [`Coordinate::degrees`] for the
/// plain decimal value (the form used for GeoJSON geometry).
///
/// # Examples
///
/// ```
/// use obs_interchange::Coordinate;
///
/// let lon = Coordinate::from_degrees(11.34);
/// assert_eq!(lon.units(), 1_134_000);
/// assert_eq!(Coordinate::from_units(4_450_000).degrees(), 44.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate(i32);

impl Coordinate {
    /// Wraps an already scaled integer value.
    pub const fn from_units(units: i32) -> Self {
        Self(units)
    }

    /// Scales a decimal degree value, rounding to the nearest unit.
    pub fn from_degrees(degrees: f64) -> Self {
        Self((degrees * f64::from(UNITS_PER_DEGREE)).round() as i32)
    }

    /// The fixed-point integer encoding.
    pub const fn units(self) -> i32 {
        self.0
    }

    /// The value in decimal degrees.
    pub fn degrees(self) -> f64 {
        f64::from(self.0) / f64::from(UNITS_PER_DEGREE)
    }

    pub(crate) fn is_valid_latitude(self) -> bool {
        (-MAX_LATITUDE_UNITS..=MAX_LATITUDE_UNITS).contains(&self.0)
    }

    pub(crate) fn is_valid_longitude(self) -> bool {
        (-MAX_LONGITUDE_UNITS..=MAX_LONGITUDE_UNITS).contains(&self.0)
    }
}

/// Formats the coordinate in decimal degrees with five decimal places.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}", self.degrees())
    }
}
