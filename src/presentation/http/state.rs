// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use axum::http::HeaderValue;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub revalidate: Duration,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, revalidate: Duration) -> Self {
        Self {
            services,
            revalidate,
        }
    }

    /// `Cache-Control` value for pages that may be served stale for up to
    /// the revalidation window.
    pub fn cache_control(&self) -> HeaderValue {
        HeaderValue::from_str(&format!("public, max-age={}", self.revalidate.as_secs()))
            .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
    }
}
