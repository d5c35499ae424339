// src/infrastructure/sanity/documents.rs
//! Typed decode of backend documents into domain values.
//!
//! Top-level fields decode strictly through serde. Rich-text blocks decode
//! one at a time so a single malformed block degrades to an `Unknown` block
//! instead of losing the article.

use crate::domain::{
    article::{
        Article, ArticleId, ArticleSlug, ArticleSummary, ArticleTitle, Difficulty, FaqEntry,
        Product, SlugEntry,
    },
    category::Category,
    content::{ContentBlock, HeadingLevel, ListKind, Mark, Span},
    errors::{DomainError, DomainResult},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(rename = "_id")]
    id: String,
    title: Option<String>,
    slug: Option<String>,
    quick_answer: Option<String>,
    problem_intro: Option<String>,
    published_at: Option<String>,
    author_name: Option<String>,
    category: Option<RawCategory>,
    categories: Option<Vec<Option<String>>>,
    difficulty: Option<String>,
    estimated_time: Option<String>,
    tools: Option<Vec<Option<String>>>,
    products: Option<Vec<RawProduct>>,
    faq: Option<Vec<RawFaq>>,
    body: Option<Vec<Value>>,
    steps: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSummary {
    #[serde(rename = "_id")]
    id: String,
    title: Option<String>,
    slug: Option<String>,
    published_at: Option<String>,
    quick_answer: Option<String>,
    author_name: Option<String>,
    category_title: Option<String>,
    categories: Option<Vec<Option<String>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSlugEntry {
    slug: Option<String>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawCategory {
    title: Option<String>,
    slug: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    name: Option<String>,
    url: Option<String>,
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFaq {
    question: Option<String>,
    answer: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    #[serde(rename = "_type", default, deserialize_with = "lenient_string")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    style: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    list_item: Option<String>,
    children: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient_array")]
    mark_defs: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    alt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSpan {
    #[serde(rename = "_type", default, deserialize_with = "lenient_string")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    text: Option<String>,
    #[serde(default, deserialize_with = "lenient_array")]
    marks: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawMarkDef {
    #[serde(rename = "_key", default, deserialize_with = "lenient_string")]
    key: Option<String>,
    #[serde(rename = "_type", default, deserialize_with = "lenient_string")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    href: Option<String>,
}

/// Rich-text attributes of the wrong JSON type read as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(value)) => Some(value),
        _ => None,
    })
}

fn lenient_array<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => values,
        _ => Vec::new(),
    })
}

fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn strings(values: Option<Vec<Option<String>>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(text)
        .collect()
}

/// Accepts RFC 3339 datetimes and bare `YYYY-MM-DD` dates.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        Err(_) => {
            tracing::debug!(value = raw, "ignoring unparsable timestamp");
            None
        }
    }
}

fn identity(
    id: String,
    title: Option<String>,
    slug: Option<String>,
) -> DomainResult<(ArticleId, ArticleTitle, ArticleSlug)> {
    let id = ArticleId::new(id).map_err(|err| DomainError::Decode(err.to_string()))?;
    let slug = text(slug)
        .ok_or_else(|| DomainError::Decode(format!("document {id} has no slug")))?;
    let title = text(title).unwrap_or_else(|| slug.clone());
    Ok((
        id,
        ArticleTitle::new(title).map_err(|err| DomainError::Decode(err.to_string()))?,
        ArticleSlug::new(slug).map_err(|err| DomainError::Decode(err.to_string()))?,
    ))
}

impl TryFrom<RawArticle> for Article {
    type Error = DomainError;

    fn try_from(raw: RawArticle) -> Result<Self, Self::Error> {
        let (id, title, slug) = identity(raw.id, raw.title, raw.slug)?;
        let mut article = Self::new(id, title, slug);

        article.quick_answer = text(raw.quick_answer);
        article.problem_intro = text(raw.problem_intro);
        article.published_at = parse_timestamp(raw.published_at.as_deref());
        article.author_name = text(raw.author_name);
        article.category = raw.category.and_then(RawCategory::into_category);
        article.categories = strings(raw.categories);
        article.difficulty = raw
            .difficulty
            .as_deref()
            .and_then(|value| value.parse::<Difficulty>().ok());
        article.estimated_time = text(raw.estimated_time);
        article.tools = strings(raw.tools);
        article.products = raw
            .products
            .unwrap_or_default()
            .into_iter()
            .filter_map(|product| {
                Some(Product {
                    name: text(product.name)?,
                    url: text(product.url),
                    notes: text(product.notes),
                })
            })
            .collect();
        article.faq = raw
            .faq
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| {
                Some(FaqEntry {
                    question: text(entry.question)?,
                    answer: text(entry.answer)?,
                })
            })
            .collect();
        article.body = raw.body.map(decode_blocks);
        article.steps = raw.steps.map(decode_blocks);
        Ok(article)
    }
}

impl TryFrom<RawSummary> for ArticleSummary {
    type Error = DomainError;

    fn try_from(raw: RawSummary) -> Result<Self, Self::Error> {
        let (id, title, slug) = identity(raw.id, raw.title, raw.slug)?;
        let mut categories: Vec<String> = Vec::new();
        for title in text(raw.category_title)
            .into_iter()
            .chain(strings(raw.categories))
        {
            if !categories.contains(&title) {
                categories.push(title);
            }
        }

        Ok(Self {
            id,
            title,
            slug,
            published_at: parse_timestamp(raw.published_at.as_deref()),
            quick_answer: text(raw.quick_answer),
            author_name: text(raw.author_name),
            categories,
        })
    }
}

impl RawSlugEntry {
    pub fn into_entry(self) -> Option<SlugEntry> {
        let slug = ArticleSlug::new(text(self.slug)?).ok()?;
        Some(SlugEntry {
            slug,
            published_at: parse_timestamp(self.published_at.as_deref()),
        })
    }
}

impl RawCategory {
    pub fn into_category(self) -> Option<Category> {
        Some(Category::new(text(self.title)?, text(self.slug)))
    }
}

pub fn decode_blocks(values: Vec<Value>) -> Vec<ContentBlock> {
    values.into_iter().map(decode_block).collect()
}

fn decode_block(value: Value) -> ContentBlock {
    let raw = match serde_json::from_value::<RawBlock>(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!(error = %err, "malformed content block");
            return ContentBlock::Unknown {
                tag: "malformed".into(),
                spans: Vec::new(),
            };
        }
    };

    match raw.kind.as_deref() {
        Some("block") => {
            let spans = decode_spans(raw.children, raw.mark_defs);
            text_block(raw.style.as_deref(), raw.list_item.as_deref(), spans)
        }
        Some("image") => match text(raw.url) {
            Some(src) => ContentBlock::Image {
                src,
                alt: text(raw.alt),
            },
            None => ContentBlock::Unknown {
                tag: "image".into(),
                spans: Vec::new(),
            },
        },
        other => ContentBlock::Unknown {
            tag: other.unwrap_or("untyped").to_string(),
            spans: decode_spans(raw.children, raw.mark_defs),
        },
    }
}

fn text_block(style: Option<&str>, list_item: Option<&str>, spans: Vec<Span>) -> ContentBlock {
    match (list_item, style) {
        (Some("bullet"), _) => ContentBlock::list_item(ListKind::Bullet, spans),
        (Some("number"), _) => ContentBlock::list_item(ListKind::Number, spans),
        (Some(other), _) => ContentBlock::Unknown {
            tag: other.to_string(),
            spans,
        },
        (None, None | Some("normal")) => ContentBlock::paragraph(spans),
        (None, Some("h2")) => ContentBlock::heading(HeadingLevel::H2, spans),
        (None, Some("h3")) => ContentBlock::heading(HeadingLevel::H3, spans),
        (None, Some(other)) => ContentBlock::Unknown {
            tag: other.to_string(),
            spans,
        },
    }
}

fn decode_spans(children: Option<Vec<Value>>, mark_defs: Vec<Value>) -> Vec<Span> {
    let mark_defs: Vec<RawMarkDef> = mark_defs
        .into_iter()
        .filter_map(|def| serde_json::from_value(def).ok())
        .collect();
    children
        .unwrap_or_default()
        .into_iter()
        .filter_map(|child| serde_json::from_value::<RawSpan>(child).ok())
        .filter(|span| span.kind.as_deref().is_none_or(|kind| kind == "span"))
        .map(|span| Span {
            text: span.text.unwrap_or_default(),
            marks: span
                .marks
                .iter()
                .filter_map(Value::as_str)
                .map(|name| decode_mark(name, &mark_defs))
                .collect(),
        })
        .collect()
}

fn decode_mark(name: &str, mark_defs: &[RawMarkDef]) -> Mark {
    if let Some(def) = mark_defs
        .iter()
        .find(|def| def.key.as_deref() == Some(name))
    {
        return match def.kind.as_deref() {
            Some("link") => Mark::Link {
                href: def.href.clone(),
            },
            Some(other) => Mark::Unknown(other.to_string()),
            None => Mark::Unknown(name.to_string()),
        };
    }

    match name {
        "strong" | "bold" | "b" => Mark::Strong,
        "em" | "italic" | "i" => Mark::Emphasis,
        "code" => Mark::Code,
        other => Mark::Unknown(other.to_string()),
    }
}
