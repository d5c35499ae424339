// src/presentation/http/views/listing.rs
use super::Head;
use crate::application::pages::{ArticleCard, GUIDES_PATH, ListingPage};
use askama::Template;
use url::form_urlencoded;

struct FilterLink {
    label: String,
    href: String,
    active: bool,
}

impl FilterLink {
    fn category(title: &str, active: bool) -> Self {
        let encoded: String = form_urlencoded::byte_serialize(title.as_bytes()).collect();
        Self {
            label: title.to_string(),
            href: format!("{GUIDES_PATH}?category={encoded}"),
            active,
        }
    }
}

struct CardView {
    title: String,
    href: String,
    quick_answer: Option<String>,
    meta: Option<String>,
    tags: Vec<FilterLink>,
}

impl From<&ArticleCard> for CardView {
    fn from(card: &ArticleCard) -> Self {
        let meta: Vec<&str> = card
            .author_name
            .iter()
            .chain(card.published_label.iter())
            .map(String::as_str)
            .collect();
        Self {
            title: card.title.clone(),
            href: card.href.clone(),
            quick_answer: card.quick_answer.clone(),
            meta: (!meta.is_empty()).then(|| meta.join(" · ")),
            tags: card
                .categories
                .iter()
                .map(|category| FilterLink::category(category, false))
                .collect(),
        }
    }
}

fn cards(page: &ListingPage) -> Vec<CardView> {
    page.cards.iter().map(CardView::from).collect()
}

#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    head: Head,
    filters: Vec<FilterLink>,
    cards: Vec<CardView>,
}

impl ListingTemplate {
    pub fn new(page: &ListingPage, site_url: &str) -> Self {
        let selected = page.selected_category.as_deref();
        let filters = if page.categories.is_empty() {
            Vec::new()
        } else {
            std::iter::once(FilterLink {
                label: "All".into(),
                href: GUIDES_PATH.into(),
                active: selected.is_none(),
            })
            .chain(page.categories.iter().map(|category| {
                FilterLink::category(&category.title, selected == Some(category.title.as_str()))
            }))
            .collect()
        };

        Self {
            head: Head::titled(selected.unwrap_or("Guides")).canonical(site_url, GUIDES_PATH),
            filters,
            cards: cards(page),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    head: Head,
    cards: Vec<CardView>,
}

impl HomeTemplate {
    pub fn new(page: &ListingPage, site_url: &str) -> Self {
        Self {
            head: Head::titled("Home").canonical(site_url, ""),
            cards: cards(page),
        }
    }
}
