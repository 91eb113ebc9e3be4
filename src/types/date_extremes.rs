use crate::types::observation_time::ObservationTime;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use std::fmt;

/// The earliest and latest timestamps covered by a record.
///
/// A bound may be absent (`None`) or carry the "no date" placeholder
/// ([`ObservationTime::Unknown`]). Serializes as a two element array of
/// ISO-8601 strings, with `null` for both of those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateExtremes {
    pub min: Option<ObservationTime>,
    pub max: Option<ObservationTime>,
}

impl DateExtremes {
    pub const fn new(min: Option<ObservationTime>, max: Option<ObservationTime>) -> Self {
        Self { min, max }
    }

    /// Both bounds equal to one instant.
    pub const fn instant(time: ObservationTime) -> Self {
        Self {
            min: Some(time),
            max: Some(time),
        }
    }

    /// `true` when neither bound is present.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Both bounds, if both are present.
    pub fn bounds(&self) -> Option<(ObservationTime, ObservationTime)> {
        Some((self.min?, self.max?))
    }
}

impl Serialize for DateExtremes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.min)?;
        tuple.serialize_element(&self.max)?;
        tuple.end()
    }
}

impl fmt::Display for DateExtremes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |bound: Option<ObservationTime>| match bound {
            Some(time) => time.to_string(),
            None => "-".to_string(),
        };
        write!(f, "[{}, {}]", show(self.min), show(self.max))
    }
}
