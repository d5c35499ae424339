// src/presentation/http/controllers/pages.rs
use crate::application::pages::ArticlePageState;
use crate::presentation::http::{
    error::HttpResult,
    state::HttpState,
    views::{
        self, AboutTemplate, ArticleTemplate, HomeTemplate, ListingTemplate, NotFoundTemplate,
        PrivacyTemplate,
    },
};
use axum::{
    Extension,
    extract::{Path, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub category: Option<String>,
}

pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let pages = &state.services.pages;
    let listing = pages.listing_page(None).await;
    views::render_template(&HomeTemplate::new(&listing, pages.site_url()))
}

pub async fn articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Html<String>> {
    let pages = &state.services.pages;
    let listing = pages.listing_page(params.category).await;
    views::render_template(&ListingTemplate::new(&listing, pages.site_url()))
}

pub async fn article(Extension(state): Extension<HttpState>, Path(slug): Path<String>) -> Response {
    let pages = &state.services.pages;
    match pages.article_page(&slug).await {
        ArticlePageState::Found(page) => {
            views::render_template(&ArticleTemplate::new(&page, pages.site_url())).into_response()
        }
        ArticlePageState::NotFound => not_found().await,
    }
}

pub async fn about(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    views::render_template(&AboutTemplate::new(state.services.pages.site_url()))
}

pub async fn privacy(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    views::render_template(&PrivacyTemplate::new(state.services.pages.site_url()))
}

pub async fn not_found() -> Response {
    views::render_template_response(&NotFoundTemplate::default(), StatusCode::NOT_FOUND)
}
