use thiserror::Error;

/// Errors surfaced by the progress engine.
///
/// Scheduling and grouping never fail; these only appear from fallible helpers
/// and from decoding cycle documents.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("invalid duration: time_spent_ms={time_spent_ms}, ref_time_ms={ref_time_ms}")]
    InvalidDuration { time_spent_ms: i64, ref_time_ms: i64 },

    #[error("malformed cycle document: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ProgressError {
    fn from(e: serde_json::Error) -> Self {
        ProgressError::Json(e.to_string())
    }
}
