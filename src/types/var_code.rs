//! Defines [`VarCode`], the B-table code identifying a meteorological variable.

use crate::types::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A WMO B-table variable code such as `B12101` (air temperature).
///
/// The textual form is the letter `B` followed by a two digit class and a three
/// digit element number. Parsing rejects anything else, so a `VarCode` held by
/// a record is always well formed.
///
/// # Examples
///
/// ```
/// use obs_interchange::VarCode;
///
/// let temperature: VarCode = "B12101".parse()?;
/// assert_eq!(temperature.class(), 12);
/// assert_eq!(temperature.element(), 101);
/// assert_eq!(temperature.to_string(), "B12101");
/// # Ok::<(), obs_interchange::RecordError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VarCode {
    class: u8,
    element: u16,
}

impl VarCode {
    /// `B05001`, station latitude (high accuracy).
    pub const LATITUDE: VarCode = VarCode::new(5, 1);
    /// `B06001`, station longitude (high accuracy).
    pub const LONGITUDE: VarCode = VarCode::new(6, 1);
    /// `B01194`, report mnemonic (network name).
    pub const REPORT_MNEMONIC: VarCode = VarCode::new(1, 194);

    /// Builds a code from its class (`XX`) and element (`YYY`) parts.
    ///
    /// Out of range parts are clamped into the two and three digit fields.
    pub const fn new(class: u8, element: u16) -> Self {
        Self {
            class: if class > 99 { 99 } else { class },
            element: if element > 999 { 999 } else { element },
        }
    }

    pub const fn class(self) -> u8 {
        self.class
    }

    pub const fn element(self) -> u16 {
        self.element
    }
}

impl FromStr for VarCode {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RecordError::InvalidVarCode(s.to_string());

        let digits = s.strip_prefix('B').ok_or_else(invalid)?;
        if digits.len() != 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let class = digits[..2].parse::<u8>().map_err(|_| invalid())?;
        let element = digits[2..].parse::<u16>().map_err(|_| invalid())?;
        Ok(Self::new(class, element))
    }
}

impl TryFrom<String> for VarCode {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VarCode> for String {
    fn from(code: VarCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for VarCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{:02}{:03}", self.class, self.element)
    }
}
