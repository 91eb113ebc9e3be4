//! Defines [`ObservationRecord`], the typed form of one record read from an
//! observation store.

use crate::types::coordinate::Coordinate;
use crate::types::date_extremes::DateExtremes;
use crate::types::error::RecordError;
use crate::types::level::{Level, TimeRange};
use crate::types::into_observation_time::IntoObservationTime;
use crate::types::observation_time::ObservationTime;
use crate::types::value::Value;
use crate::types::var_code::VarCode;
use bon::bon;
use std::collections::BTreeMap;

/// One observation (or observation summary) for a station, variable, level and
/// time range.
///
/// Records are immutable. They are created through [`ObservationRecord::builder`],
/// which validates coordinates and date extremes, so every record handed to an
/// encoder is already well formed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use obs_interchange::{Coordinate, Level, ObservationRecord, ObservationTime, TimeRange, VarCode};
///
/// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let temperature: VarCode = "B12101".parse()?;
///
/// let record = ObservationRecord::builder()
///     .lon(Coordinate::from_units(445_000))
///     .lat(Coordinate::from_units(112_000))
///     .rep_memo("synop")
///     .level(Level::new(Some(1), Some(0), Some(0), Some(0)))
///     .trange(TimeRange::new(Some(0), Some(0), Some(0)))
///     .var(temperature)
///     .date(date)
///     .value(293)
///     .build()?;
///
/// assert_eq!(record.ident(), None);
/// assert_eq!(record.value(temperature).and_then(|v| v.as_f64()), Some(293.0));
/// assert_eq!(record.date(), Some(ObservationTime::At(date)));
/// assert_eq!(record.date_extremes().bounds(), Some((ObservationTime::At(date), ObservationTime::At(date))));
/// # Ok::<(), obs_interchange::RecordError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRecord {
    ident: Option<String>,
    lon: Coordinate,
    lat: Coordinate,
    rep_memo: String,
    level: Level,
    trange: TimeRange,
    var: VarCode,
    date: Option<ObservationTime>,
    datemin: Option<ObservationTime>,
    datemax: Option<ObservationTime>,
    values: BTreeMap<VarCode, Value>,
}

#[bon]
impl ObservationRecord {
    /// Creates a validated record.
    ///
    /// `value`, when given, is stored as the value of `var`. The date and the
    /// extremes accept any chrono timestamp; one equal to the external "no
    /// date" placeholder becomes [`ObservationTime::Unknown`].
    ///
    /// # Errors
    ///
    /// * [`RecordError::LatitudeOutOfRange`] / [`RecordError::LongitudeOutOfRange`]
    ///   for coordinates outside the valid degree ranges.
    /// * [`RecordError::InvertedExtremes`] if a known `datemin` is after a
    ///   known `datemax`.
    #[builder]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        #[builder(into)] ident: Option<String>,
        lon: Coordinate,
        lat: Coordinate,
        #[builder(into)] rep_memo: String,
        #[builder(default)] level: Level,
        #[builder(default)] trange: TimeRange,
        var: VarCode,
        #[builder(into)] date: Option<ObservationTime>,
        #[builder(into)] datemin: Option<ObservationTime>,
        #[builder(into)] datemax: Option<ObservationTime>,
        #[builder(into)] value: Option<Value>,
        #[builder(default)] values: BTreeMap<VarCode, Value>,
    ) -> Result<Self, RecordError> {
        if !lat.is_valid_latitude() {
            return Err(RecordError::LatitudeOutOfRange(lat));
        }
        if !lon.is_valid_longitude() {
            return Err(RecordError::LongitudeOutOfRange(lon));
        }

        let date = date.map(IntoObservationTime::into_observation_time);
        let datemin = datemin.map(IntoObservationTime::into_observation_time);
        let datemax = datemax.map(IntoObservationTime::into_observation_time);
        if let (Some(ObservationTime::At(min)), Some(ObservationTime::At(max))) = (datemin, datemax) {
            if min > max {
                return Err(RecordError::InvertedExtremes { min, max });
            }
        }

        let mut values = values;
        if let Some(value) = value {
            values.insert(var, value);
        }

        Ok(Self {
            ident,
            lon,
            lat,
            rep_memo,
            level,
            trange,
            var,
            date,
            datemin,
            datemax,
            values,
        })
    }
}

impl ObservationRecord {
    /// Station identifier; `None` for fixed stations.
    pub fn ident(&self) -> Option<&str> {
        self.ident.as_deref()
    }

    pub fn lon(&self) -> Coordinate {
        self.lon
    }

    pub fn lat(&self) -> Coordinate {
        self.lat
    }

    /// Network (report type) name.
    pub fn rep_memo(&self) -> &str {
        &self.rep_memo
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn trange(&self) -> TimeRange {
        self.trange
    }

    pub fn var(&self) -> VarCode {
        self.var
    }

    /// The exact observation date, if the record has one.
    pub fn date(&self) -> Option<ObservationTime> {
        self.date
    }

    /// The value stored for `code`.
    pub fn value(&self, code: VarCode) -> Option<&Value> {
        self.values.get(&code)
    }

    pub fn values(&self) -> &BTreeMap<VarCode, Value> {
        &self.values
    }

    /// The time span covered by the record.
    ///
    /// Explicit extremes win when either is set. Otherwise the exact date,
    /// placeholder included, gives a zero-length span, and a record without
    /// any date gives `(None, None)`.
    pub fn date_extremes(&self) -> DateExtremes {
        if self.datemin.is_some() || self.datemax.is_some() {
            return DateExtremes::new(self.datemin, self.datemax);
        }
        match self.date {
            Some(time) => DateExtremes::instant(time),
            None => DateExtremes::default(),
        }
    }
}
