//! Provides [`SummaryDecoder`], the reverse of [`crate::SummaryEncoder`].

use crate::summary::error::DecodeError;
use crate::summary::summary_record::SummaryRecord;
use crate::types::record::ObservationRecord;
use log::debug;
use std::io;

/// Decodes summary JSON back into observation records.
///
/// Decoding is all or nothing: one malformed entry fails the whole document,
/// and the error names the offending array index.
///
/// # Examples
///
/// ```
/// use obs_interchange::SummaryDecoder;
///
/// let text = r#"[{"ident":null,"lon":445000,"lat":112000,"rep_memo":"synop",
///                 "level":[1,0,0,0],"trange":[0,0,0],"bcode":"B12101",
///                 "date":["2020-01-01T00:00:00","2020-01-01T00:00:00"]}]"#;
///
/// let records = SummaryDecoder::new().decode(text)?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].var().to_string(), "B12101");
/// # Ok::<(), obs_interchange::DecodeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryDecoder;

impl SummaryDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a JSON array of summary entries.
    pub fn decode(&self, s: &str) -> Result<Vec<ObservationRecord>, DecodeError> {
        into_records(serde_json::from_str(s)?)
    }

    /// Decodes a JSON array of summary entries from bytes.
    pub fn decode_slice(&self, bytes: &[u8]) -> Result<Vec<ObservationRecord>, DecodeError> {
        into_records(serde_json::from_slice(bytes)?)
    }

    /// Decodes a JSON array of summary entries from a reader.
    pub fn decode_reader<R>(&self, reader: R) -> Result<Vec<ObservationRecord>, DecodeError>
    where
        R: io::Read,
    {
        into_records(serde_json::from_reader(reader)?)
    }

    /// Decodes a single summary object (not wrapped in an array).
    pub fn decode_one(&self, s: &str) -> Result<ObservationRecord, DecodeError> {
        let entry: SummaryRecord = serde_json::from_str(s)?;
        entry.into_record(0)
    }
}

fn into_records(entries: Vec<SummaryRecord>) -> Result<Vec<ObservationRecord>, DecodeError> {
    let records = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_record(index))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Decoded {} summary records", records.len());
    Ok(records)
}
