use crate::application::render::{RenderedNode, render};
use crate::domain::{
    article::{Article, Difficulty, FaqEntry, Product},
    category::Category,
    content::ContentBlock,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

pub const GUIDES_PATH: &str = "/articles";

/// Human-facing date such as "March 2, 2025".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
}

/// Everything the article template needs, with rich text already rendered.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticlePage {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_answer: Option<String>,
    /// Meta description: the quick answer, else the opening paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_intro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    pub tools: Vec<String>,
    #[schema(value_type = Vec<Object>)]
    pub products: Vec<Product>,
    #[schema(value_type = Vec<Object>)]
    pub faq: Vec<FaqEntry>,
    #[schema(value_type = Vec<Object>)]
    pub steps: Vec<RenderedNode>,
    #[schema(value_type = Vec<Object>)]
    pub body: Vec<RenderedNode>,
    pub breadcrumbs: Vec<Breadcrumb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub structured_data: Option<Value>,
}

impl ArticlePage {
    pub fn has_details(&self) -> bool {
        self.difficulty.is_some()
            || self.estimated_time.is_some()
            || !self.tools.is_empty()
            || !self.products.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.steps.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum ArticlePageState {
    Found(Box<ArticlePage>),
    NotFound,
}

impl From<Article> for ArticlePage {
    fn from(article: Article) -> Self {
        let steps = render(article.steps.as_deref());
        let body = render(article.body.as_deref());
        let structured_data = faq_schema(&article.faq);
        let quick_answer = non_blank(article.quick_answer);
        let description = quick_answer
            .clone()
            .or_else(|| opening_paragraph(article.body.as_deref()));
        let breadcrumbs = vec![
            Breadcrumb {
                label: "Guides".into(),
                href: GUIDES_PATH.into(),
            },
            Breadcrumb {
                label: article.title.as_str().to_string(),
                href: format!("/{}", article.slug),
            },
        ];

        Self {
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            author_name: non_blank(article.author_name),
            published_label: article.published_at.as_ref().map(format_date),
            published_at: article.published_at,
            category: article.category,
            quick_answer,
            description,
            problem_intro: non_blank(article.problem_intro),
            difficulty: article.difficulty,
            estimated_time: non_blank(article.estimated_time),
            tools: article.tools,
            products: article.products,
            faq: article.faq,
            steps,
            body,
            breadcrumbs,
            structured_data,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

const DESCRIPTION_LIMIT: usize = 160;

fn opening_paragraph(body: Option<&[ContentBlock]>) -> Option<String> {
    let text = body?
        .iter()
        .filter(|block| matches!(block, ContentBlock::Paragraph { .. }))
        .map(ContentBlock::plain_text)
        .find(|text| !text.trim().is_empty())?;
    let text = text.trim();
    if text.chars().count() <= DESCRIPTION_LIMIT {
        return Some(text.to_string());
    }
    let cut: String = text.chars().take(DESCRIPTION_LIMIT - 1).collect();
    Some(format!("{}…", cut.trim_end()))
}

/// schema.org `FAQPage` markup, present only when the article has entries.
fn faq_schema(faq: &[FaqEntry]) -> Option<Value> {
    if faq.is_empty() {
        return None;
    }
    let questions: Vec<Value> = faq
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": { "@type": "Answer", "text": entry.answer },
            })
        })
        .collect();
    Some(json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleId, ArticleSlug, ArticleTitle};
    use crate::domain::content::{ContentBlock, Span};
    use chrono::TimeZone;

    fn article() -> Article {
        Article::new(
            ArticleId::new("post-7").unwrap(),
            ArticleTitle::new("Clean a dryer vent").unwrap(),
            ArticleSlug::new("clean-a-dryer-vent").unwrap(),
        )
    }

    #[test]
    fn assembles_header_and_rendered_body() {
        let mut article = article();
        article.author_name = Some("Sam".into());
        article.published_at = Some(Utc.with_ymd_and_hms(2025, 3, 2, 9, 30, 0).unwrap());
        article.quick_answer = Some("Once a year.".into());
        article.body = Some(vec![ContentBlock::paragraph(vec![Span::plain("Unplug it.")])]);

        let page = ArticlePage::from(article);
        assert_eq!(page.title, "Clean a dryer vent");
        assert_eq!(page.author_name.as_deref(), Some("Sam"));
        assert_eq!(page.published_label.as_deref(), Some("March 2, 2025"));
        assert_eq!(page.quick_answer.as_deref(), Some("Once a year."));
        assert_eq!(page.body.len(), 1);
        assert!(page.steps.is_empty());
        assert_eq!(page.breadcrumbs[1].href, "/clean-a-dryer-vent");
        assert!(page.structured_data.is_none());
    }

    #[test]
    fn missing_body_yields_empty_page_body() {
        let page = ArticlePage::from(article());
        assert!(page.is_empty());
        assert!(!page.has_details());
    }

    #[test]
    fn blank_optional_text_is_dropped() {
        let mut article = article();
        article.quick_answer = Some("   ".into());
        article.author_name = Some(String::new());
        let page = ArticlePage::from(article);
        assert!(page.quick_answer.is_none());
        assert!(page.author_name.is_none());
    }

    #[test]
    fn faq_entries_produce_schema_markup() {
        let mut article = article();
        article.faq = vec![FaqEntry {
            question: "How often?".into(),
            answer: "Yearly.".into(),
        }];
        let page = ArticlePage::from(article);
        let schema = page.structured_data.unwrap();
        assert_eq!(schema["@type"], "FAQPage");
        assert_eq!(schema["mainEntity"][0]["name"], "How often?");
        assert_eq!(schema["mainEntity"][0]["acceptedAnswer"]["text"], "Yearly.");
    }

    #[test]
    fn description_prefers_quick_answer_then_first_paragraph() {
        let mut article = article();
        article.body = Some(vec![
            ContentBlock::paragraph(vec![Span::plain("  ")]),
            ContentBlock::paragraph(vec![Span::plain("Unplug "), Span::plain("the dryer.")]),
        ]);
        let page = ArticlePage::from(article.clone());
        assert_eq!(page.description.as_deref(), Some("Unplug the dryer."));

        article.quick_answer = Some("Once a year.".into());
        let page = ArticlePage::from(article);
        assert_eq!(page.description.as_deref(), Some("Once a year."));
    }

    #[test]
    fn long_opening_paragraph_is_shortened() {
        let mut article = article();
        article.body = Some(vec![ContentBlock::paragraph(vec![Span::plain("a".repeat(400))])]);
        let description = ArticlePage::from(article).description.unwrap();
        assert_eq!(description.chars().count(), DESCRIPTION_LIMIT);
        assert!(description.ends_with('…'));
    }
}
