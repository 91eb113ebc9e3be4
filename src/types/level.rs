//! Vertical level and time range descriptors.
//!
//! Both are written to JSON as fixed-length arrays (`[t1, v1, t2, v2]` and
//! `[pind, p1, p2]`). Any element may be `null`.

use serde::{Deserialize, Serialize};

type LevelTuple = (Option<i32>, Option<i32>, Option<i32>, Option<i32>);
type TimeRangeTuple = (Option<i32>, Option<i32>, Option<i32>);

/// The vertical position of an observation: two level types and their values.
///
/// # Examples
///
/// ```
/// use obs_interchange::Level;
///
/// // Surface level
/// let surface = Level::new(Some(1), None, None, None);
/// assert_eq!(serde_json::to_string(&surface).unwrap(), "[1,null,null,null]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "LevelTuple", into = "LevelTuple")]
pub struct Level {
    pub ltype1: Option<i32>,
    pub l1: Option<i32>,
    pub ltype2: Option<i32>,
    pub l2: Option<i32>,
}

impl Level {
    pub const fn new(
        ltype1: Option<i32>,
        l1: Option<i32>,
        ltype2: Option<i32>,
        l2: Option<i32>,
    ) -> Self {
        Self {
            ltype1,
            l1,
            ltype2,
            l2,
        }
    }
}

impl From<LevelTuple> for Level {
    fn from((ltype1, l1, ltype2, l2): LevelTuple) -> Self {
        Self::new(ltype1, l1, ltype2, l2)
    }
}

impl From<Level> for LevelTuple {
    fn from(level: Level) -> Self {
        (level.ltype1, level.l1, level.ltype2, level.l2)
    }
}

/// The statistical processing applied over time: an indicator and two periods.
///
/// # Examples
///
/// ```
/// use obs_interchange::TimeRange;
///
/// // Instantaneous value
/// let instant = TimeRange::new(Some(254), Some(0), Some(0));
/// assert_eq!(serde_json::to_string(&instant).unwrap(), "[254,0,0]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "TimeRangeTuple", into = "TimeRangeTuple")]
pub struct TimeRange {
    pub pind: Option<i32>,
    pub p1: Option<i32>,
    pub p2: Option<i32>,
}

impl TimeRange {
    pub const fn new(pind: Option<i32>, p1: Option<i32>, p2: Option<i32>) -> Self {
        Self { pind, p1, p2 }
    }
}

impl From<TimeRangeTuple> for TimeRange {
    fn from((pind, p1, p2): TimeRangeTuple) -> Self {
        Self::new(pind, p1, p2)
    }
}

impl From<TimeRange> for TimeRangeTuple {
    fn from(trange: TimeRange) -> Self {
        (trange.pind, trange.p1, trange.p2)
    }
}
