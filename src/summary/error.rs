use crate::types::error::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to parse summary JSON")]
    Json(#[from] serde_json::Error),

    #[error("Summary {index} has a malformed {bound} timestamp '{value}'")]
    InvalidTimestamp {
        index: usize,
        bound: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Summary {index} does not describe a valid observation record")]
    InvalidRecord {
        index: usize,
        #[source]
        source: RecordError,
    },
}
