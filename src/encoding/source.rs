//! Draining fallible record sources (database cursors, async streams) before
//! encoding.
//!
//! A source is read to the end before anything is written, so a failure part
//! way through never leaves a truncated document behind.

use crate::encoding::error::{EncodeError, SourceError};
use crate::types::record::ObservationRecord;
use futures_util::{pin_mut, Stream, StreamExt};
use log::warn;

pub(crate) fn collect_cursor<I, E>(cursor: I) -> Result<Vec<ObservationRecord>, EncodeError>
where
    I: IntoIterator<Item = Result<ObservationRecord, E>>,
    E: Into<SourceError>,
{
    let mut records = Vec::new();
    for item in cursor {
        match item {
            Ok(record) => records.push(record),
            Err(e) => return Err(source_failed(records.len(), e.into())),
        }
    }
    Ok(records)
}

pub(crate) async fn collect_stream<S, E>(stream: S) -> Result<Vec<ObservationRecord>, EncodeError>
where
    S: Stream<Item = Result<ObservationRecord, E>>,
    E: Into<SourceError>,
{
    pin_mut!(stream);
    let mut records = Vec::new();
    while let Some(item) = stream.next().await {
        match item {
            Ok(record) => records.push(record),
            Err(e) => return Err(source_failed(records.len(), e.into())),
        }
    }
    Ok(records)
}

fn source_failed(records_read: usize, source: SourceError) -> EncodeError {
    warn!(
        "Observation source failed after {} records: {}",
        records_read, source
    );
    EncodeError::Source {
        records_read,
        source,
    }
}
