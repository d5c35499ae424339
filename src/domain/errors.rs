// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("content backend unavailable: {0}")]
    Unavailable(String),
    #[error("content query rejected: {0}")]
    Query(String),
    #[error("malformed content document: {0}")]
    Decode(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
