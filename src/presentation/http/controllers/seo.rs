// src/presentation/http/controllers/seo.rs
use crate::application::pages::sitemap_xml;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::header,
    response::IntoResponse,
};

pub async fn sitemap(Extension(state): Extension<HttpState>) -> impl IntoResponse {
    let entries = state.services.pages.sitemap().await;
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&entries),
    )
}

pub async fn robots(Extension(state): Extension<HttpState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.services.pages.robots(),
    )
}
