// src/presentation/http/openapi.rs
use crate::application::pages::{ArticleCard, ArticlePage, Breadcrumb};
use crate::presentation::http::controllers::subscribers::{MessageResponse, SubscribeRequest};
use crate::presentation::http::error::ErrorResponse;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::list_slugs,
        crate::presentation::http::controllers::subscribers::subscribe,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            MessageResponse,
            SubscribeRequest,
            ArticleCard,
            ArticlePage,
            Breadcrumb
        )
    ),
    tags(
        (name = "Articles", description = "Read-only article endpoints"),
        (name = "Subscribers", description = "Newsletter signup"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Homeguide API",
        description = "Home maintenance guides served from a headless CMS",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi.json".to_string())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_json_endpoints() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/api/articles",
            "/api/articles/{slug}",
            "/api/slugs",
            "/api/subscribe",
            "/health",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(doc["components"]["schemas"]["ArticlePage"].is_object());
    }
}
