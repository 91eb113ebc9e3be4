use crate::types::coordinate::Coordinate;
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid B-code '{0}': expected 'B' followed by five digits")]
    InvalidVarCode(String),

    #[error("Latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(Coordinate),

    #[error("Longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(Coordinate),

    #[error("Date extremes are inverted: minimum {min} is after maximum {max}")]
    InvertedExtremes {
        min: NaiveDateTime,
        max: NaiveDateTime,
    },
}
