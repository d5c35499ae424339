// src/presentation/http/views/mod.rs
//! Server-side HTML for the public pages, rendered through askama templates
//! under `templates/`.

mod article;
mod listing;
mod static_pages;

pub use article::ArticleTemplate;
pub use listing::{HomeTemplate, ListingTemplate};
pub use static_pages::{AboutTemplate, NotFoundTemplate, PrivacyTemplate};

use crate::presentation::http::error::{HttpError, HttpResult};
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::Value;

const DEFAULT_DESCRIPTION: &str =
    "Practical home maintenance and repair guides with direct answers.";

/// Document head shared by every page through `base.html`.
#[derive(Debug, Clone)]
pub struct Head {
    pub title: String,
    pub description: String,
    pub canonical: Option<String>,
    /// Serialized JSON-LD with `</` neutralized; emitted unescaped.
    pub structured_data: Option<String>,
}

impl Head {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            canonical: None,
            structured_data: None,
        }
    }

    #[must_use]
    pub fn described(mut self, description: Option<&str>) -> Self {
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            self.description = description.to_string();
        }
        self
    }

    #[must_use]
    pub fn canonical(mut self, site_url: &str, path: &str) -> Self {
        self.canonical = Some(format!("{}{path}", site_url.trim_end_matches('/')));
        self
    }

    #[must_use]
    pub fn structured_data(mut self, data: Option<&Value>) -> Self {
        self.structured_data = data.map(|value| value.to_string().replace("</", "<\\/"));
        self
    }
}

pub fn render_template<T: Template>(template: &T) -> HttpResult<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|err| HttpError::internal("template rendering failed", &err))
}

pub fn render_template_response<T: Template>(template: &T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}
