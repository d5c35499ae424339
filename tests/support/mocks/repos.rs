// tests/support/mocks/repos.rs
use async_trait::async_trait;
use homeguide::domain::{
    article::{Article, ArticleFilter, ArticleReadRepository, ArticleSlug, ArticleSummary, SlugEntry},
    category::{Category, CategoryReadRepository},
    errors::{DomainError, DomainResult},
    subscriber::{NewSubscriber, SubscriberRepository},
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Article store held in memory. `down` makes every read fail the way an
/// unreachable backend would.
#[derive(Clone, Default)]
pub struct InMemoryArticles {
    articles: Arc<Vec<Article>>,
    down: bool,
    reads: Arc<AtomicUsize>,
}

impl InMemoryArticles {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(articles),
            ..Self::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn check(&self) -> DomainResult<()> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.down {
            Err(DomainError::Unavailable("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
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

#[derive(Clone, Default)]
pub struct InMemoryCategories {
    categories: Vec<Category>,
}

impl InMemoryCategories {
    pub fn new(titles: &[&str]) -> Self {
        Self {
            categories: titles.iter().map(|t| Category::new(*t, None)).collect(),
        }
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategories {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}

/// Records every created subscriber; `failing` rejects writes.
#[derive(Clone, Default)]
pub struct RecordingSubscribers {
    created: Arc<Mutex<Vec<NewSubscriber>>>,
    failing: bool,
}

impl RecordingSubscribers {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<NewSubscriber> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriberRepository for RecordingSubscribers {
    async fn create(&self, subscriber: NewSubscriber) -> DomainResult<()> {
        if self.failing {
            return Err(DomainError::Persistence("write token rejected".into()));
        }
        self.created.lock().unwrap().push(subscriber);
        Ok(())
    }
}
