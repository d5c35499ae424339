// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Rejected input. The message is safe to show to the visitor.
    #[error("{0}")]
    Validation(String),

    #[error("backend write failed: {0}")]
    Storage(#[from] DomainError),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
