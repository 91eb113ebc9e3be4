//! The wire form of one summary entry and its conversions from and to
//! [`ObservationRecord`].

use crate::encoding::error::EncodeError;
use crate::iso::{format_seconds, parse_seconds};
use crate::summary::error::DecodeError;
use crate::types::coordinate::Coordinate;
use crate::types::level::{Level, TimeRange};
use crate::types::observation_time::ObservationTime;
use crate::types::record::ObservationRecord;
use crate::types::var_code::VarCode;
use log::trace;
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of a summary document.
///
/// `lon`/`lat` are fixed-point integer coordinates and `date` holds the
/// `[min, max]` extremes in the whole-second format
/// [`SUMMARY_DATE_FORMAT`](crate::iso::SUMMARY_DATE_FORMAT). A bound that is
/// the "no date" placeholder is written as `1000-01-01T00:00:00`, as external
/// stores do. Every field is required when decoding; `ident` may be `null` but
/// must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(deserialize_with = "present_or_null")]
    pub ident: Option<String>,
    pub lon: i32,
    pub lat: i32,
    pub rep_memo: String,
    pub level: Level,
    pub trange: TimeRange,
    pub bcode: String,
    pub date: (String, String),
}

impl SummaryRecord {
    /// Builds the summary entry for `record`, which sits at `index` of the
    /// encoded input.
    ///
    /// # Errors
    ///
    /// [`EncodeError::MissingDateExtremes`] unless both extremes are known.
    pub fn from_record(record: &ObservationRecord, index: usize) -> Result<Self, EncodeError> {
        let (min, max) = record
            .date_extremes()
            .bounds()
            .ok_or(EncodeError::MissingDateExtremes { index })?;

        Ok(Self {
            ident: record.ident().map(str::to_string),
            lon: record.lon().units(),
            lat: record.lat().units(),
            rep_memo: record.rep_memo().to_string(),
            level: record.level(),
            trange: record.trange(),
            bcode: record.var().to_string(),
            date: (
                format_seconds(&min.to_external()),
                format_seconds(&max.to_external()),
            ),
        })
    }

    /// Rebuilds the observation record described by this entry, which sits at
    /// `index` of the decoded document.
    ///
    /// The result has no exact date; the extremes become `datemin`/`datemax`,
    /// with the placeholder kept as [`ObservationTime::Unknown`].
    pub fn into_record(self, index: usize) -> Result<ObservationRecord, DecodeError> {
        let invalid = |source| DecodeError::InvalidRecord { index, source };

        let var: VarCode = self.bcode.parse().map_err(invalid)?;
        let datemin = parse_bound(&self.date.0, index, "minimum")?;
        let datemax = parse_bound(&self.date.1, index, "maximum")?;

        ObservationRecord::builder()
            .maybe_ident(self.ident)
            .lon(Coordinate::from_units(self.lon))
            .lat(Coordinate::from_units(self.lat))
            .rep_memo(self.rep_memo)
            .level(self.level)
            .trange(self.trange)
            .var(var)
            .datemin(datemin)
            .datemax(datemax)
            .build()
            .map_err(invalid)
    }
}

fn parse_bound(value: &str, index: usize, bound: &'static str) -> Result<ObservationTime, DecodeError> {
    let dt = parse_seconds(value).map_err(|source| DecodeError::InvalidTimestamp {
        index,
        bound,
        value: value.to_string(),
        source,
    })?;
    let time = ObservationTime::from_external(dt);
    if time.is_unknown() {
        trace!("Summary {} has the placeholder date as its {} bound", index, bound);
    }
    Ok(time)
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation_time::missing_date_marker;
    use chrono::{NaiveDate, NaiveDateTime};

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .unwrap()
    }

    fn entry(date: (&str, &str)) -> SummaryRecord {
        SummaryRecord {
            ident: None,
            lon: 445_000,
            lat: 112_000,
            rep_memo: "synop".to_string(),
            level: Level::new(Some(1), Some(0), Some(0), Some(0)),
            trange: TimeRange::new(Some(0), Some(0), Some(0)),
            bcode: "B12101".to_string(),
            date: (date.0.to_string(), date.1.to_string()),
        }
    }

    #[test]
    fn test_field_order_and_shape() -> Result<(), serde_json::Error> {
        let text = serde_json::to_string(&entry(("2020-01-01T00:00:00", "2020-01-02T00:00:00")))?;
        assert_eq!(
            text,
            r#"{"ident":null,"lon":445000,"lat":112000,"rep_memo":"synop","level":[1,0,0,0],"trange":[0,0,0],"bcode":"B12101","date":["2020-01-01T00:00:00","2020-01-02T00:00:00"]}"#
        );
        Ok(())
    }

    #[test]
    fn test_ident_must_be_present() {
        let missing = r#"{"lon":1,"lat":1,"rep_memo":"x","level":[1,0,0,0],"trange":[0,0,0],"bcode":"B12101","date":["2020-01-01T00:00:00","2020-01-01T00:00:00"]}"#;
        assert!(serde_json::from_str::<SummaryRecord>(missing).is_err());

        let null = r#"{"ident":null,"lon":1,"lat":1,"rep_memo":"x","level":[1,0,0,0],"trange":[0,0,0],"bcode":"B12101","date":["2020-01-01T00:00:00","2020-01-01T00:00:00"]}"#;
        assert!(serde_json::from_str::<SummaryRecord>(null).is_ok());
    }

    #[test]
    fn test_into_record() -> Result<(), DecodeError> {
        let record = entry(("2020-01-01T00:00:00", "2020-03-01T12:30:00")).into_record(0)?;
        assert_eq!(record.var(), VarCode::new(12, 101));
        assert_eq!(record.date(), None);
        assert_eq!(
            record.date_extremes().bounds(),
            Some((
                ObservationTime::At(datetime(2020, 1, 1, 0, 0, 0)),
                ObservationTime::At(datetime(2020, 3, 1, 12, 30, 0))
            ))
        );
        Ok(())
    }

    #[test]
    fn test_placeholder_bounds_survive_conversion() -> Result<(), Box<dyn std::error::Error>> {
        let mut constant = entry(("1000-01-01T00:00:00", "1000-01-01T00:00:00"));
        constant.bcode = "B05001".to_string();

        let record = constant.clone().into_record(0)?;
        assert_eq!(
            record.date_extremes().bounds(),
            Some((ObservationTime::Unknown, ObservationTime::Unknown))
        );
        assert_eq!(SummaryRecord::from_record(&record, 0)?, constant);
        Ok(())
    }

    #[test]
    fn test_from_record_writes_placeholder_for_unknown_date() -> Result<(), Box<dyn std::error::Error>> {
        let record = ObservationRecord::builder()
            .lon(Coordinate::from_units(0))
            .lat(Coordinate::from_units(0))
            .rep_memo("synop")
            .var(VarCode::REPORT_MNEMONIC)
            .date(missing_date_marker())
            .build()?;

        let summary = SummaryRecord::from_record(&record, 0)?;
        assert_eq!(
            summary.date,
            ("1000-01-01T00:00:00".to_string(), "1000-01-01T00:00:00".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_into_record_bad_timestamp() {
        let result = entry(("2020-01-01T00:00:00", "2020-01-01T00:00:00.5")).into_record(7);
        match result {
            Err(DecodeError::InvalidTimestamp {
                index, bound, value, ..
            }) => {
                assert_eq!(index, 7);
                assert_eq!(bound, "maximum");
                assert_eq!(value, "2020-01-01T00:00:00.5");
            }
            other => panic!("expected a timestamp error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_record_bad_bcode() {
        let mut bad = entry(("2020-01-01T00:00:00", "2020-01-01T00:00:00"));
        bad.bcode = "12101".to_string();
        assert!(matches!(
            bad.into_record(2),
            Err(DecodeError::InvalidRecord { index: 2, .. })
        ));
    }

    #[test]
    fn test_from_record_truncates_sub_seconds() -> Result<(), Box<dyn std::error::Error>> {
        let min = NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|d| d.and_hms_milli_opt(0, 0, 0, 750))
            .unwrap();
        let record = ObservationRecord::builder()
            .lon(Coordinate::from_units(0))
            .lat(Coordinate::from_units(0))
            .rep_memo("synop")
            .var(VarCode::new(12, 101))
            .datemin(min)
            .datemax(datetime(2020, 1, 2, 0, 0, 0))
            .build()?;

        let summary = SummaryRecord::from_record(&record, 0)?;
        assert_eq!(
            summary.date,
            ("2020-01-01T00:00:00".to_string(), "2020-01-02T00:00:00".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_from_record_requires_both_extremes() -> Result<(), Box<dyn std::error::Error>> {
        let record = ObservationRecord::builder()
            .lon(Coordinate::from_units(0))
            .lat(Coordinate::from_units(0))
            .rep_memo("synop")
            .var(VarCode::new(12, 101))
            .datemin(datetime(2020, 1, 1, 0, 0, 0))
            .build()?;

        assert!(matches!(
            SummaryRecord::from_record(&record, 3),
            Err(EncodeError::MissingDateExtremes { index: 3 })
        ));
        Ok(())
    }
}
