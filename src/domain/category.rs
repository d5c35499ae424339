// src/domain/category.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use serde::Serialize;

/// Display value of a category reference, resolved at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Category {
    pub fn new(title: impl Into<String>, slug: Option<String>) -> Self {
        Self {
            title: title.into(),
            slug,
        }
    }
}

#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    /// All categories ordered by title.
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
