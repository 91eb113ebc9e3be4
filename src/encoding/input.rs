use crate::types::record::ObservationRecord;

/// What an encoder is asked to encode: one record or a sequence of records.
///
/// The two cases produce different documents (a bare object versus a
/// collection), so the caller states which one it means instead of the
/// encoder guessing from the value.
///
/// `From` conversions let callers pass `&record`, `&[records]` or `&vec`
/// directly to the encode methods.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    Single(&'a ObservationRecord),
    Many(&'a [ObservationRecord]),
}

impl<'a> From<&'a ObservationRecord> for Input<'a> {
    fn from(record: &'a ObservationRecord) -> Self {
        Input::Single(record)
    }
}

impl<'a> From<&'a [ObservationRecord]> for Input<'a> {
    fn from(records: &'a [ObservationRecord]) -> Self {
        Input::Many(records)
    }
}

impl<'a, const N: usize> From<&'a [ObservationRecord; N]> for Input<'a> {
    fn from(records: &'a [ObservationRecord; N]) -> Self {
        Input::Many(records)
    }
}

impl<'a> From<&'a Vec<ObservationRecord>> for Input<'a> {
    fn from(records: &'a Vec<ObservationRecord>) -> Self {
        Input::Many(records)
    }
}
