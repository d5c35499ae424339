// src/presentation/http/controllers/articles.rs
use crate::application::{
    pages::{ArticleCard, ArticlePage, ArticlePageState},
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Category title to filter by.
    #[serde(default)]
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Published articles, newest first. Empty when the content backend is unavailable.", body = [ArticleCard])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> Json<Vec<ArticleCard>> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            category: params.category,
        })
        .await;
    Json(articles.into_iter().map(ArticleCard::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article with rendered content.", body = ArticlePage),
        (status = 404, description = "No article with this slug, or the backend could not be read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticlePage>> {
    match state.services.pages.article_page(&slug).await {
        ArticlePageState::Found(page) => Ok(Json(*page)),
        ArticlePageState::NotFound => Err(HttpError::not_found(format!(
            "article '{slug}' not found"
        ))),
    }
}

#[utoipa::path(
    get,
    path = "/api/slugs",
    responses(
        (status = 200, description = "Every published slug, sorted and deduplicated.", body = [String])
    ),
    tag = "Articles"
)]
pub async fn list_slugs(Extension(state): Extension<HttpState>) -> Json<Vec<String>> {
    let slugs = state.services.article_queries.list_all_slugs().await;
    Json(slugs.into_iter().collect())
}
