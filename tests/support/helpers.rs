// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryArticles, InMemoryCategories, RecordingSubscribers};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use homeguide::application::services::{ApplicationServices, ServiceSettings};
use homeguide::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::{sync::Arc, time::Duration};

pub const SITE_URL: &str = "https://example.com";

pub struct TestApp {
    pub router: axum::Router,
    pub articles: InMemoryArticles,
    pub subscribers: RecordingSubscribers,
}

pub fn make_test_app(
    articles: InMemoryArticles,
    categories: InMemoryCategories,
    subscribers: RecordingSubscribers,
) -> TestApp {
    let services = Arc::new(ApplicationServices::new(
        Arc::new(articles.clone()),
        Arc::new(categories),
        Arc::new(subscribers.clone()),
        Arc::new(FixedClock),
        ServiceSettings {
            site_url: SITE_URL.into(),
            subscriber_source: "maintenance-checklist".into(),
        },
    ));
    let state = HttpState::new(services, Duration::from_secs(60));
    TestApp {
        router: build_router(state),
        articles,
        subscribers,
    }
}

pub fn make_test_router(articles: InMemoryArticles) -> axum::Router {
    make_test_app(
        articles,
        InMemoryCategories::default(),
        RecordingSubscribers::default(),
    )
    .router
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn body_string(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(resp: Response) -> Value {
    serde_json::from_str(&body_string(resp).await).expect("json body")
}

/// Assert a `{error, message}` JSON body with the expected status.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field"
    );
}
