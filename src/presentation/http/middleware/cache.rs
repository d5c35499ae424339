// src/presentation/http/middleware/cache.rs
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::{Method, Request, header},
    middleware::Next,
    response::Response,
};

/// Adds the revalidation window to successful reads that did not set their
/// own caching policy.
pub async fn cache_control(req: Request<Body>, next: Next) -> Response {
    let is_read = req.method() == Method::GET || req.method() == Method::HEAD;
    let value = req
        .extensions()
        .get::<HttpState>()
        .filter(|_| is_read)
        .map(HttpState::cache_control);

    let mut response = next.run(req).await;
    if let Some(value) = value
        && response.status().is_success()
        && !response.headers().contains_key(header::CACHE_CONTROL)
    {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    response
}
