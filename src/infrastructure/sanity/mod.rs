// src/infrastructure/sanity/mod.rs
mod client;
mod documents;
mod error;
mod queries;
mod repositories;

pub use client::SanityClient;
pub use documents::parse_timestamp;
pub use error::SanityError;
pub use repositories::{
    SanityArticleRepository, SanityCategoryRepository, SanitySubscriberRepository,
    subscriber_document,
};
