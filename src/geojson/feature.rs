//! GeoJSON document types produced by [`crate::GeoJsonEncoder`].

use crate::types::date_extremes::DateExtremes;
use crate::types::observation_time::ObservationTime;
use crate::types::value::Value;
use crate::types::var_code::VarCode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Point,
    pub properties: FeatureProperties,
}

/// A point geometry; `coordinates` is `[longitude, latitude]` in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Point")]
pub struct Point {
    pub coordinates: [f64; 2],
}

/// Properties of an observation feature.
///
/// `lon` and `lat` carry the fixed-point integer coordinates, unlike the
/// geometry which is in degrees. `value` is only present for records with an
/// exact date, and is `null` there when the record holds no value for its
/// variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureProperties {
    pub ident: Option<String>,
    pub lon: i32,
    pub lat: i32,
    pub network: String,
    pub level_t1: Option<i32>,
    pub level_v1: Option<i32>,
    pub level_t2: Option<i32>,
    pub level_v2: Option<i32>,
    pub trange_pind: Option<i32>,
    pub trange_p1: Option<i32>,
    pub trange_p2: Option<i32>,
    pub bcode: VarCode,
    pub datetime: FeatureDatetime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Option<Value>>,
}

/// The `datetime` property: an exact time, a `[min, max]` span, or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureDatetime {
    Exact(ObservationTime),
    Span(DateExtremes),
    Missing,
}

/// The document produced for an encode call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeoJson {
    Collection(FeatureCollection),
    /// A single record; `None` (JSON `null`) when the record was skipped.
    Feature(Option<Feature>),
}
