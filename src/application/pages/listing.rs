use super::article::format_date;
use crate::domain::{article::ArticleSummary, category::Category};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ArticleCard {
    pub title: String,
    pub slug: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_label: Option<String>,
    pub categories: Vec<String>,
}

impl From<ArticleSummary> for ArticleCard {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            href: format!("/{}", summary.slug),
            title: summary.title.into_inner(),
            slug: summary.slug.into_inner(),
            author_name: summary.author_name.filter(|name| !name.trim().is_empty()),
            quick_answer: summary.quick_answer.filter(|text| !text.trim().is_empty()),
            published_label: summary.published_at.as_ref().map(format_date),
            categories: summary.categories,
        }
    }
}

/// Article index with its category filter bar.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub cards: Vec<ArticleCard>,
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
