// src/infrastructure/sanity/repositories.rs
use super::{
    client::SanityClient,
    documents::{RawArticle, RawCategory, RawSlugEntry, RawSummary},
    error::map_write_error,
    queries,
};
use crate::domain::{
    article::{
        Article, ArticleFilter, ArticleReadRepository, ArticleSlug, ArticleSummary, SlugEntry,
    },
    category::{Category, CategoryReadRepository},
    errors::DomainResult,
    subscriber::{NewSubscriber, SubscriberRepository},
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Clone)]
pub struct SanityArticleRepository {
    client: Arc<SanityClient>,
}

impl SanityArticleRepository {
    pub fn new(client: Arc<SanityClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArticleReadRepository for SanityArticleRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let raw: Option<RawArticle> = self
            .client
            .fetch(queries::ARTICLE_BY_SLUG, &[("slug", json!(slug.as_str()))])
            .await?;
        raw.map(Article::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<ArticleSummary>> {
        let category = filter
            .category
            .as_deref()
            .map_or(Value::Null, |category| json!(category));
        let raw: Option<Vec<RawSummary>> = self
            .client
            .fetch(queries::ARTICLES, &[("category", category)])
            .await?;

        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|doc| match ArticleSummary::try_from(doc) {
                Ok(summary) => Some(summary),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping undecodable article summary");
                    None
                }
            })
            .collect())
    }

    async fn list_slugs(&self) -> DomainResult<Vec<SlugEntry>> {
        let raw: Option<Vec<RawSlugEntry>> = self.client.fetch(queries::SLUGS, &[]).await?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawSlugEntry::into_entry)
            .collect())
    }
}

#[derive(Clone)]
pub struct SanityCategoryRepository {
    client: Arc<SanityClient>,
}

impl SanityCategoryRepository {
    pub fn new(client: Arc<SanityClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryReadRepository for SanityCategoryRepository {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        let raw: Option<Vec<RawCategory>> = self.client.fetch(queries::CATEGORIES, &[]).await?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawCategory::into_category)
            .collect())
    }
}

#[derive(Clone)]
pub struct SanitySubscriberRepository {
    client: Arc<SanityClient>,
}

impl SanitySubscriberRepository {
    pub fn new(client: Arc<SanityClient>) -> Self {
        Self { client }
    }
}

/// Document shape stored for a signup.
pub fn subscriber_document(subscriber: &NewSubscriber) -> Value {
    json!({
        "_type": queries::SUBSCRIBER_TYPE,
        "email": subscriber.email.as_str(),
        "source": subscriber.source,
        "signupDate": subscriber
            .signup_date
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    })
}

#[async_trait]
impl SubscriberRepository for SanitySubscriberRepository {
    async fn create(&self, subscriber: NewSubscriber) -> DomainResult<()> {
        self.client
            .create(subscriber_document(&subscriber))
            .await
            .map_err(map_write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subscriber::EmailAddress;
    use chrono::{TimeZone, Utc};

    #[test]
    fn subscriber_document_matches_stored_shape() {
        let doc = subscriber_document(&NewSubscriber {
            email: EmailAddress::new("a@b.com").unwrap(),
            source: "maintenance-checklist".into(),
            signup_date: Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap(),
        });
        assert_eq!(
            doc,
            json!({
                "_type": "subscriber",
                "email": "a@b.com",
                "source": "maintenance-checklist",
                "signupDate": "2025-03-04T05:06:07.000Z"
            })
        );
    }
}
