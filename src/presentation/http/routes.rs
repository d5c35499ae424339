// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, pages, seo, subscribers},
    middleware::{cache, redirects},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    middleware,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .route("/api/articles", get(articles::list_articles))
        .route("/api/articles/{slug}", get(articles::get_article))
        .route("/api/slugs", get(articles::list_slugs))
        .route("/api/subscribe", post(subscribers::subscribe))
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/robots.txt", get(seo::robots))
        .route("/", get(pages::home))
        .route("/articles", get(pages::articles))
        .route("/about", get(pages::about))
        .route("/privacy-policy", get(pages::privacy))
        .route("/{slug}", get(pages::article))
        .fallback(pages::not_found)
        .layer(middleware::from_fn(cache::cache_control))
        .layer(middleware::from_fn(redirects::redirect_retired_paths))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
