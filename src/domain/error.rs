// Domain error taxonomy
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input matches neither `YYYY-MM-DD` nor `YYYY-MM-DD HH:MM:SS`.
    #[error("malformed timestamp `{0}`")]
    MalformedTimestamp(String),

    #[error("unsupported granularity `{0}`")]
    UnsupportedGranularity(String),
}
