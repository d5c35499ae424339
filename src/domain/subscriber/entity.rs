// src/domain/subscriber/entity.rs
use crate::domain::subscriber::value_objects::EmailAddress;
use chrono::{DateTime, Utc};

/// A newsletter signup. Written once and never read back by this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscriber {
    pub email: EmailAddress,
    pub source: String,
    pub signup_date: DateTime<Utc>,
}
