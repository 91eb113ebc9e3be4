//! The encoder interface shared by the GeoJSON and summary dialects.

pub mod error;
pub mod input;
pub(crate) mod source;

use crate::encoding::error::{EncodeError, SourceError};
use crate::encoding::input::Input;
use crate::types::record::ObservationRecord;
use serde::Serialize;
use std::io;

/// An encoder from observation records to one JSON dialect.
///
/// Implementors only describe how to build the document; writing it out
/// (compact or pretty, to a string, a byte vector or any [`io::Write`]) and
/// draining fallible cursors is shared.
pub trait ObservationEncoder {
    /// The serializable document produced for an [`Input`].
    type Document: Serialize;

    fn document(&self, input: Input<'_>) -> Result<Self::Document, EncodeError>;

    /// Whether output is indented.
    fn is_pretty(&self) -> bool;

    /// Encodes to a JSON string.
    fn encode<'a>(&self, input: impl Into<Input<'a>>) -> Result<String, EncodeError> {
        let document = self.document(input.into())?;
        let json = if self.is_pretty() {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    /// Encodes to JSON bytes.
    fn encode_to_vec<'a>(&self, input: impl Into<Input<'a>>) -> Result<Vec<u8>, EncodeError> {
        let document = self.document(input.into())?;
        let json = if self.is_pretty() {
            serde_json::to_vec_pretty(&document)?
        } else {
            serde_json::to_vec(&document)?
        };
        Ok(json)
    }

    /// Encodes into `writer`. The document is built completely before the
    /// first byte is written.
    fn encode_to_writer<'a, W>(&self, input: impl Into<Input<'a>>, writer: W) -> Result<(), EncodeError>
    where
        W: io::Write,
    {
        let document = self.document(input.into())?;
        if self.is_pretty() {
            serde_json::to_writer_pretty(writer, &document)?;
        } else {
            serde_json::to_writer(writer, &document)?;
        }
        Ok(())
    }

    /// Drains a fallible cursor and encodes the records as a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Source`] with the number of records read so far
    /// if the cursor yields an error. Nothing is encoded in that case.
    fn encode_cursor<I, E>(&self, cursor: I) -> Result<String, EncodeError>
    where
        I: IntoIterator<Item = Result<ObservationRecord, E>>,
        E: Into<SourceError>,
    {
        let records = source::collect_cursor(cursor)?;
        self.encode(&records)
    }
}
