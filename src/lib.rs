//! Encode meteorological observation records as GeoJSON for map display, and
//! as a compact summary JSON dialect that can be decoded back into records.
//!
//! Records are built with [`ObservationRecord::builder`] (or decoded with
//! [`SummaryDecoder`]) and handed to an [`ObservationEncoder`]:
//! [`GeoJsonEncoder`] or [`SummaryEncoder`].

mod encoding;
mod error;
mod geojson;
pub mod iso;
mod summary;
mod types;

pub use error::CodecError;

pub use encoding::error::{EncodeError, SourceError};
pub use encoding::input::Input;
pub use encoding::ObservationEncoder;

pub use geojson::encoder::{GeoJsonEncoder, DEFAULT_SKIP_VARS};
pub use geojson::feature::{
    Feature, FeatureCollection, FeatureDatetime, FeatureProperties, GeoJson, Point,
};

pub use summary::decoder::SummaryDecoder;
pub use summary::encoder::{SummaryDocument, SummaryEncoder};
pub use summary::error::DecodeError;
pub use summary::summary_record::SummaryRecord;

pub use types::coordinate::{Coordinate, UNITS_PER_DEGREE};
pub use types::date_extremes::DateExtremes;
pub use types::error::RecordError;
pub use types::into_observation_time::IntoObservationTime;
pub use types::level::{Level, TimeRange};
pub use types::observation_time::{is_missing_date_marker, missing_date_marker, ObservationTime};
pub use types::record::ObservationRecord;
pub use types::value::Value;
pub use types::var_code::VarCode;
