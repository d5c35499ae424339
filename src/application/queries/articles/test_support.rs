//! In-memory repositories for the query service tests.

use crate::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleSummary,
        ArticleTitle, SlugEntry,
    },
    category::{Category, CategoryReadRepository},
    errors::{DomainError, DomainResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

pub fn article(slug: &str, published_at: Option<DateTime<Utc>>) -> Article {
    let mut article = Article::new(
        ArticleId::new(format!("id-{slug}")).unwrap(),
        ArticleTitle::new(format!("Title for {slug}")).unwrap(),
        ArticleSlug::new(slug).unwrap(),
    );
    article.published_at = published_at;
    article
}

#[derive(Default)]
pub struct StubArticles {
    articles: Vec<Article>,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl StubArticles {
    pub fn with(articles: Vec<Article>) -> Self {
        Self {
            articles,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn check(&self) -> DomainResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(DomainError::Unavailable("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleReadRepository for StubArticles {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.check()?;
        Ok(self.articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<ArticleSummary>> {
        self.check()?;
        Ok(self
            .articles
            .iter()
            .cloned()
            .map(ArticleSummary::from)
            .filter(|summary| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|category| summary.categories.iter().any(|title| title == category))
            })
            .collect())
    }

    async fn list_slugs(&self) -> DomainResult<Vec<SlugEntry>> {
        self.check()?;
        Ok(self
            .articles
            .iter()
            .map(|a| SlugEntry {
                slug: a.slug.clone(),
                published_at: a.published_at,
            })
            .collect())
    }
}

#[derive(Default)]
pub struct StubCategories {
    categories: Vec<Category>,
    fail: bool,
}

impl StubCategories {
    pub fn with(categories: Vec<Category>) -> Self {
        Self {
            categories,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            categories: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CategoryReadRepository for StubCategories {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        if self.fail {
            return Err(DomainError::Query("unexpected token".into()));
        }
        Ok(self.categories.clone())
    }
}
