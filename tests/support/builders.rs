// tests/support/builders.rs
use chrono::{DateTime, Utc};
use homeguide::domain::{
    article::{Article, ArticleId, ArticleSlug, ArticleTitle},
    content::ContentBlock,
};

pub struct ArticleBuilder {
    slug: String,
    title: String,
    published_at: Option<DateTime<Utc>>,
    quick_answer: Option<String>,
    categories: Vec<String>,
    body: Option<Vec<ContentBlock>>,
}

impl ArticleBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.into(),
            title: slug.replace('-', " "),
            published_at: None,
            quick_answer: None,
            categories: Vec::new(),
            body: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn published(mut self, rfc3339: &str) -> Self {
        self.published_at = Some(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        );
        self
    }

    pub fn quick_answer(mut self, answer: impl Into<String>) -> Self {
        self.quick_answer = Some(answer.into());
        self
    }

    pub fn category(mut self, title: impl Into<String>) -> Self {
        self.categories.push(title.into());
        self
    }

    pub fn body(mut self, blocks: Vec<ContentBlock>) -> Self {
        self.body = Some(blocks);
        self
    }

    pub fn build(self) -> Article {
        let mut article = Article::new(
            ArticleId::new(format!("id-{}", self.slug)).unwrap(),
            ArticleTitle::new(self.title).unwrap(),
            ArticleSlug::new(self.slug).unwrap(),
        );
        article.published_at = self.published_at;
        article.quick_answer = self.quick_answer;
        article.categories = self.categories;
        article.body = self.body;
        article
    }
}
