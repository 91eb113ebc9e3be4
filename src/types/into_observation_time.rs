use crate::types::observation_time::ObservationTime;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};

/// Conversion of the timestamp types a caller may hold into an
/// [`ObservationTime`].
///
/// Timezone-aware values are normalised to UTC first. Every conversion goes
/// through [`ObservationTime::from_external`], so the "no date" placeholder
/// becomes [`ObservationTime::Unknown`].
pub trait IntoObservationTime {
    fn into_observation_time(self) -> ObservationTime;
}

impl IntoObservationTime for ObservationTime {
    fn into_observation_time(self) -> ObservationTime {
        self.normalized()
    }
}

impl IntoObservationTime for NaiveDateTime {
    fn into_observation_time(self) -> ObservationTime {
        ObservationTime::from_external(self)
    }
}

impl IntoObservationTime for DateTime<Utc> {
    fn into_observation_time(self) -> ObservationTime {
        ObservationTime::from_external(self.naive_utc())
    }
}

impl IntoObservationTime for DateTime<Local> {
    fn into_observation_time(self) -> ObservationTime {
        ObservationTime::from_external(self.naive_utc())
    }
}

impl IntoObservationTime for DateTime<FixedOffset> {
    fn into_observation_time(self) -> ObservationTime {
        ObservationTime::from_external(self.naive_utc())
    }
}

/// Lets the record builder take chrono timestamps directly.
macro_rules! impl_from_chrono {
    ($($source:ty),*) => {
        $(
            impl From<$source> for ObservationTime {
                fn from(value: $source) -> Self {
                    value.into_observation_time()
                }
            }
        )*
    };
}

impl_from_chrono!(NaiveDateTime, DateTime<Utc>, DateTime<Local>, DateTime<FixedOffset>);
