//! Provides [`GeoJsonEncoder`], which turns observation records into GeoJSON
//! point features for map display.

use crate::encoding::error::{EncodeError, SourceError};
use crate::encoding::input::Input;
use crate::encoding::source::collect_stream;
use crate::encoding::ObservationEncoder;
use crate::geojson::feature::{Feature, FeatureCollection, FeatureDatetime, FeatureProperties, GeoJson, Point};
use crate::types::observation_time::ObservationTime;
use crate::types::record::ObservationRecord;
use crate::types::var_code::VarCode;
use bon::bon;
use futures_util::Stream;
use log::{debug, trace};

/// Variables whose records are left out of feature collections when their
/// date is the "no date" placeholder: station coordinates and network name.
pub const DEFAULT_SKIP_VARS: [VarCode; 3] = [
    VarCode::LATITUDE,
    VarCode::LONGITUDE,
    VarCode::REPORT_MNEMONIC,
];

/// Encodes observation records as GeoJSON.
///
/// A sequence of records becomes a `FeatureCollection` of `Point` features; a
/// single record becomes a bare `Feature`. GeoJSON is an output-only dialect:
/// there is no matching decoder.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use obs_interchange::{Coordinate, GeoJsonEncoder, ObservationEncoder, ObservationRecord, ObservationTime};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let record = ObservationRecord::builder()
///     .lon(Coordinate::from_units(445_000))
///     .lat(Coordinate::from_units(112_000))
///     .rep_memo("synop")
///     .var("B12101".parse()?)
///     .date(ObservationTime::At(date))
///     .value(293)
///     .build()?;
///
/// let encoder = GeoJsonEncoder::builder().pretty(true).build();
/// let json = encoder.encode(&vec![record])?;
/// assert!(json.contains("\"FeatureCollection\""));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonEncoder {
    pretty: bool,
    skip_vars: Vec<VarCode>,
}

#[bon]
impl GeoJsonEncoder {
    /// Creates an encoder.
    ///
    /// # Arguments
    ///
    /// * `pretty` - Indent the output (default: compact).
    /// * `skip_vars` - Variables dropped when dated with the "no date"
    ///   placeholder (default: [`DEFAULT_SKIP_VARS`]).
    #[builder]
    pub fn new(#[builder(default)] pretty: bool, skip_vars: Option<Vec<VarCode>>) -> Self {
        Self {
            pretty,
            skip_vars: skip_vars.unwrap_or_else(|| DEFAULT_SKIP_VARS.to_vec()),
        }
    }
}

impl Default for GeoJsonEncoder {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GeoJsonEncoder {
    pub fn skip_vars(&self) -> &[VarCode] {
        &self.skip_vars
    }

    /// `true` if `record` is left out of feature collections: its date is the
    /// "no date" placeholder and its variable is one of the skip variables.
    pub fn should_skip(&self, record: &ObservationRecord) -> bool {
        record.date() == Some(ObservationTime::Unknown) && self.skip_vars.contains(&record.var())
    }

    /// Builds the feature for one record, regardless of the skip rule.
    pub fn feature(&self, record: &ObservationRecord) -> Feature {
        Feature {
            geometry: Point {
                coordinates: [record.lon().degrees(), record.lat().degrees()],
            },
            properties: properties(record),
        }
    }

    /// Builds a feature collection, applying the skip rule.
    pub fn feature_collection<'a, I>(&self, records: I) -> FeatureCollection
    where
        I: IntoIterator<Item = &'a ObservationRecord>,
    {
        let mut total = 0usize;
        let features: Vec<Feature> = records
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|record| {
                let skip = self.should_skip(record);
                if skip {
                    trace!(
                        "Skipping undated {} record for station {}",
                        record.var(),
                        record.ident().unwrap_or("<fixed>")
                    );
                }
                !skip
            })
            .map(|record| self.feature(record))
            .collect();
        debug!("Encoded {} of {} records as GeoJSON features", features.len(), total);
        FeatureCollection { features }
    }

    /// Drains an async record stream and encodes it as a feature collection.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Source`] if the stream yields an error.
    pub async fn encode_stream<S, E>(&self, stream: S) -> Result<String, EncodeError>
    where
        S: Stream<Item = Result<ObservationRecord, E>>,
        E: Into<SourceError>,
    {
        let records = collect_stream(stream).await?;
        self.encode(&records)
    }
}

impl ObservationEncoder for GeoJsonEncoder {
    type Document = GeoJson;

    fn document(&self, input: Input<'_>) -> Result<GeoJson, EncodeError> {
        let document = match input {
            Input::Many(records) => GeoJson::Collection(self.feature_collection(records)),
            Input::Single(record) if self.should_skip(record) => GeoJson::Feature(None),
            Input::Single(record) => GeoJson::Feature(Some(self.feature(record))),
        };
        Ok(document)
    }

    fn is_pretty(&self) -> bool {
        self.pretty
    }
}

fn properties(record: &ObservationRecord) -> FeatureProperties {
    let level = record.level();
    let trange = record.trange();

    let (datetime, value) = match record.date() {
        Some(date) => (
            FeatureDatetime::Exact(date),
            Some(record.value(record.var()).cloned()),
        ),
        None => {
            let extremes = record.date_extremes();
            if extremes.is_empty() {
                (FeatureDatetime::Missing, None)
            } else {
                (FeatureDatetime::Span(extremes), None)
            }
        }
    };

    FeatureProperties {
        ident: record.ident().map(str::to_string),
        lon: record.lon().units(),
        lat: record.lat().units(),
        network: record.rep_memo().to_string(),
        level_t1: level.ltype1,
        level_v1: level.l1,
        level_t2: level.ltype2,
        level_v2: level.l2,
        trange_pind: trange.pind,
        trange_p1: trange.p1,
        trange_p2: trange.p2,
        bcode: record.var(),
        datetime,
        value,
    }
}
