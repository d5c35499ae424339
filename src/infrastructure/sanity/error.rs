use crate::domain::errors::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SanityError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("query rejected with status {status}: {message}")]
    Query { status: u16, message: String },
    #[error("backend responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no write token configured")]
    MissingToken,
}

impl From<SanityError> for DomainError {
    fn from(err: SanityError) -> Self {
        match err {
            SanityError::Query { .. } => Self::Query(err.to_string()),
            SanityError::Decode(_) => Self::Decode(err.to_string()),
            SanityError::MissingToken => Self::Persistence(err.to_string()),
            SanityError::Url(_) | SanityError::Http(_) | SanityError::Status { .. } => {
                Self::Unavailable(err.to_string())
            }
        }
    }
}

/// Every failure on the write path is a persistence failure to callers.
pub fn map_write_error(err: SanityError) -> DomainError {
    DomainError::Persistence(err.to_string())
}
