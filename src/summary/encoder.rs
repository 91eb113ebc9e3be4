//! Provides [`SummaryEncoder`], which writes the compact summary dialect read
//! back by [`crate::SummaryDecoder`].

use crate::encoding::error::{EncodeError, SourceError};
use crate::encoding::input::Input;
use crate::encoding::source::collect_stream;
use crate::encoding::ObservationEncoder;
use crate::summary::summary_record::SummaryRecord;
use crate::types::record::ObservationRecord;
use bon::bon;
use futures_util::Stream;
use log::debug;
use serde::Serialize;

/// The document produced for an encode call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SummaryDocument {
    One(SummaryRecord),
    Many(Vec<SummaryRecord>),
}

/// Encodes records as summary JSON.
///
/// A single record becomes one summary object and a sequence becomes an array
/// of them; both use the same eight keys. Extremes are written with whole
/// second precision, so anything finer is dropped.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use obs_interchange::{Coordinate, ObservationEncoder, ObservationRecord, SummaryDecoder, SummaryEncoder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let day = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let summary = ObservationRecord::builder()
///     .lon(Coordinate::from_units(1_134_000))
///     .lat(Coordinate::from_units(4_450_000))
///     .rep_memo("locali")
///     .var("B13011".parse()?)
///     .datemin(day(1))
///     .datemax(day(31))
///     .build()?;
///
/// let json = SummaryEncoder::default().encode(&vec![summary.clone()])?;
/// let decoded = SummaryDecoder::new().decode(&json)?;
/// assert_eq!(decoded[0].date_extremes(), summary.date_extremes());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryEncoder {
    pretty: bool,
}

#[bon]
impl SummaryEncoder {
    /// Creates an encoder; `pretty` indents the output (default: compact).
    #[builder]
    pub fn new(#[builder(default)] pretty: bool) -> Self {
        Self { pretty }
    }
}

impl SummaryEncoder {
    /// Drains an async record stream and encodes it as a summary array.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Source`] if the stream yields an error, and
    /// [`EncodeError::MissingDateExtremes`] for a record without both extremes.
    pub async fn encode_stream<S, E>(&self, stream: S) -> Result<String, EncodeError>
    where
        S: Stream<Item = Result<ObservationRecord, E>>,
        E: Into<SourceError>,
    {
        let records = collect_stream(stream).await?;
        self.encode(&records)
    }
}

impl ObservationEncoder for SummaryEncoder {
    type Document = SummaryDocument;

    fn document(&self, input: Input<'_>) -> Result<SummaryDocument, EncodeError> {
        match input {
            Input::Single(record) => Ok(SummaryDocument::One(SummaryRecord::from_record(record, 0)?)),
            Input::Many(records) => {
                let summaries = records
                    .iter()
                    .enumerate()
                    .map(|(index, record)| SummaryRecord::from_record(record, index))
                    .collect::<Result<Vec<_>, _>>()?;
                debug!("Encoded {} summary records", summaries.len());
                Ok(SummaryDocument::Many(summaries))
            }
        }
    }

    fn is_pretty(&self) -> bool {
        self.pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::coordinate::Coordinate;
    use crate::types::level::{Level, TimeRange};
    use crate::types::observation_time::ObservationTime;
    use crate::types::var_code::VarCode;
    use chrono::{NaiveDate, NaiveDateTime};
    use futures_util::stream;
    use serde_json::{json, Value as Json};
    use std::io;

    fn datetime(y: i32, mo: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    fn summary(ident: Option<&str>, min: NaiveDateTime, max: NaiveDateTime) -> ObservationRecord {
        ObservationRecord::builder()
            .maybe_ident(ident)
            .lon(Coordinate::from_units(445_000))
            .lat(Coordinate::from_units(112_000))
            .rep_memo("synop")
            .level(Level::new(Some(1), Some(0), Some(0), Some(0)))
            .trange(TimeRange::new(Some(0), Some(0), Some(0)))
            .var(VarCode::new(12, 101))
            .datemin(min)
            .datemax(max)
            .build()
            .unwrap()
    }

    #[test]
    fn test_single_record_is_object() -> Result<(), EncodeError> {
        let record = summary(None, datetime(2020, 1, 1), datetime(2020, 1, 1));
        let json: Json = serde_json::from_str(&SummaryEncoder::default().encode(&record)?)?;
        assert_eq!(
            json,
            json!({
                "ident": null,
                "lon": 445000,
                "lat": 112000,
                "rep_memo": "synop",
                "level": [1, 0, 0, 0],
                "trange": [0, 0, 0],
                "bcode": "B12101",
                "date": ["2020-01-01T00:00:00", "2020-01-01T00:00:00"]
            })
        );
        Ok(())
    }

    #[test]
    fn test_sequence_uses_same_shape_as_single() -> Result<(), EncodeError> {
        let encoder = SummaryEncoder::default();
        let records = vec![
            summary(Some("ship01"), datetime(2019, 1, 1), datetime(2019, 6, 30)),
            summary(None, datetime(2020, 1, 1), datetime(2020, 1, 1)),
        ];

        let many: Json = serde_json::from_str(&encoder.encode(&records)?)?;
        let items = many.as_array().unwrap();
        assert_eq!(items.len(), 2);
        for (item, record) in items.iter().zip(&records) {
            let single: Json = serde_json::from_str(&encoder.encode(record)?)?;
            assert_eq!(item, &single);
            assert_eq!(item.as_object().map(|o| o.len()), Some(8));
        }
        Ok(())
    }

    #[test]
    fn test_exact_date_summarised_as_instant() -> Result<(), Box<dyn std::error::Error>> {
        let record = ObservationRecord::builder()
            .lon(Coordinate::from_units(0))
            .lat(Coordinate::from_units(0))
            .rep_memo("synop")
            .var(VarCode::new(12, 101))
            .date(ObservationTime::At(datetime(2021, 7, 1)))
            .build()?;
        let json: Json = serde_json::from_str(&SummaryEncoder::default().encode(&record)?)?;
        assert_eq!(json["date"], json!(["2021-07-01T00:00:00", "2021-07-01T00:00:00"]));
        Ok(())
    }

    #[test]
    fn test_missing_extremes_fail_whole_encode() -> Result<(), Box<dyn std::error::Error>> {
        let undated = ObservationRecord::builder()
            .lon(Coordinate::from_units(0))
            .lat(Coordinate::from_units(0))
            .rep_memo("synop")
            .var(VarCode::LATITUDE)
            .build()?;
        let records = vec![summary(None, datetime(2020, 1, 1), datetime(2020, 1, 2)), undated];

        let result = SummaryEncoder::default().encode(&records);
        assert!(matches!(result, Err(EncodeError::MissingDateExtremes { index: 1 })));
        Ok(())
    }

    #[test]
    fn test_pretty() -> Result<(), EncodeError> {
        let records = vec![summary(None, datetime(2020, 1, 1), datetime(2020, 1, 1))];
        let pretty = SummaryEncoder::builder().pretty(true).build().encode(&records)?;
        assert!(pretty.starts_with("[\n"));
        Ok(())
    }

    #[test]
    fn test_encode_cursor() -> Result<(), EncodeError> {
        let cursor = vec![
            Ok::<_, io::Error>(summary(None, datetime(2020, 1, 1), datetime(2020, 1, 2))),
            Ok(summary(Some("a"), datetime(2020, 2, 1), datetime(2020, 2, 2))),
        ];
        let json: Json = serde_json::from_str(&SummaryEncoder::default().encode_cursor(cursor)?)?;
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn test_encode_stream() -> Result<(), EncodeError> {
        let items = stream::iter(vec![Ok::<_, io::Error>(summary(
            None,
            datetime(2020, 1, 1),
            datetime(2020, 1, 2),
        ))]);
        let text = SummaryEncoder::default().encode_stream(items).await?;
        assert!(text.starts_with("[{\"ident\":null"));
        Ok(())
    }
}
