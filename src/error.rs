use crate::encoding::error::EncodeError;
use crate::summary::error::DecodeError;
use crate::types::error::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
