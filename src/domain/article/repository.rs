use crate::domain::article::entity::{Article, ArticleSummary, SlugEntry};
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Category title (or slug) an article must belong to.
    pub category: Option<String>,
}

impl ArticleFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }
}

/// Read side of the content backend. Implementations report transport and
/// query failures as errors; absence of a document is `Ok(None)`.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<ArticleSummary>>;
    async fn list_slugs(&self) -> DomainResult<Vec<SlugEntry>>;
}
