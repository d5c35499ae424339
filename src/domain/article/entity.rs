// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle, Difficulty};
use crate::domain::category::Category;
use crate::domain::content::ContentBlock;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A fully projected article. Author and category references arrive already
/// resolved to display values.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub quick_answer: Option<String>,
    pub problem_intro: Option<String>,
    pub body: Option<Vec<ContentBlock>>,
    pub steps: Option<Vec<ContentBlock>>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_name: Option<String>,
    pub category: Option<Category>,
    pub categories: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub estimated_time: Option<String>,
    pub tools: Vec<String>,
    pub products: Vec<Product>,
    pub faq: Vec<FaqEntry>,
}

impl Article {
    pub fn new(id: ArticleId, title: ArticleTitle, slug: ArticleSlug) -> Self {
        Self {
            id,
            title,
            slug,
            quick_answer: None,
            problem_intro: None,
            body: None,
            steps: None,
            published_at: None,
            author_name: None,
            category: None,
            categories: Vec::new(),
            difficulty: None,
            estimated_time: None,
            tools: Vec::new(),
            products: Vec::new(),
            faq: Vec::new(),
        }
    }

    /// Titles of every category the article is filed under, primary first,
    /// without duplicates.
    pub fn category_titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = Vec::new();
        let primary = self.category.as_ref().map(|category| category.title.clone());
        for title in primary.into_iter().chain(self.categories.iter().cloned()) {
            if !titles.contains(&title) {
                titles.push(title);
            }
        }
        titles
    }
}

/// The card-sized projection used by listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub published_at: Option<DateTime<Utc>>,
    pub quick_answer: Option<String>,
    pub author_name: Option<String>,
    pub categories: Vec<String>,
}

impl From<Article> for ArticleSummary {
    fn from(article: Article) -> Self {
        let categories = article.category_titles();
        Self {
            id: article.id,
            title: article.title,
            slug: article.slug,
            published_at: article.published_at,
            quick_answer: article.quick_answer,
            author_name: article.author_name,
            categories,
        }
    }
}

/// Slug plus the timestamp the sitemap reports for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugEntry {
    pub slug: ArticleSlug,
    pub published_at: Option<DateTime<Utc>>,
}
