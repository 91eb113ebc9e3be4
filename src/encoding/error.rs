use thiserror::Error;

/// Boxed error produced by a record cursor or stream.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to write JSON output")]
    Json(#[from] serde_json::Error),

    #[error("Record {index} has no date extremes to summarise")]
    MissingDateExtremes { index: usize },

    // Raised while pulling records lazily from a cursor or stream
    #[error("Observation source failed after {records_read} records")]
    Source {
        records_read: usize,
        #[source]
        source: SourceError,
    },
}
