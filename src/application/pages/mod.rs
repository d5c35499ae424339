//! Page assembly: query, render, and shape the view models handlers serve.

mod article;
mod listing;
mod seo;

pub use article::{ArticlePage, ArticlePageState, Breadcrumb, GUIDES_PATH, format_date};
pub use listing::{ArticleCard, ListingPage};
pub use seo::{ChangeFrequency, SitemapEntry, robots_txt, sitemap_entries, sitemap_xml};

use crate::application::{
    ports::time::Clock,
    queries::articles::{ArticleQueryService, GetArticleBySlugQuery, ListArticlesQuery},
};
use std::sync::Arc;

pub struct PageService {
    queries: Arc<ArticleQueryService>,
    clock: Arc<dyn Clock>,
    site_url: String,
}

impl PageService {
    pub fn new(
        queries: Arc<ArticleQueryService>,
        clock: Arc<dyn Clock>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            queries,
            clock,
            site_url: site_url.into(),
        }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub async fn article_page(&self, slug: &str) -> ArticlePageState {
        let query = GetArticleBySlugQuery {
            slug: slug.to_string(),
        };
        match self.queries.get_article_by_slug(query).await {
            Some(article) => ArticlePageState::Found(Box::new(ArticlePage::from(article))),
            None => ArticlePageState::NotFound,
        }
    }

    /// Articles and categories are fetched concurrently; either may come back
    /// empty without affecting the other.
    pub async fn listing_page(&self, category: Option<String>) -> ListingPage {
        let selected_category = category
            .map(|category| category.trim().to_string())
            .filter(|category| !category.is_empty());
        let query = ListArticlesQuery {
            category: selected_category.clone(),
        };

        let (articles, categories) = tokio::join!(
            self.queries.list_articles(query),
            self.queries.list_categories()
        );

        ListingPage {
            cards: articles.into_iter().map(ArticleCard::from).collect(),
            categories,
            selected_category,
        }
    }

    pub async fn sitemap(&self) -> Vec<SitemapEntry> {
        let slugs = self.queries.slug_entries().await;
        sitemap_entries(&self.site_url, slugs, self.clock.now())
    }

    pub fn robots(&self) -> String {
        robots_txt(&self.site_url)
    }
}
