// tests/e2e_seo.rs
use axum::http::{StatusCode, header};
use tower::util::ServiceExt as _;

mod support;
use support::{ArticleBuilder, InMemoryArticles};

fn location(resp: &axum::response::Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[tokio::test]
async fn sitemap_lists_static_pages_and_articles() {
    let app = support::make_test_router(InMemoryArticles::new(vec![
        ArticleBuilder::new("seal-a-window")
            .published("2024-10-01T08:00:00Z")
            .build(),
        ArticleBuilder::new("undated").build(),
    ]));
    let resp = app.oneshot(support::get("/sitemap.xml")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/xml"))
    );

    let xml = support::body_string(resp).await;
    assert!(xml.contains("<loc>https://example.com</loc>"));
    assert!(xml.contains("<loc>https://example.com/articles</loc>"));
    assert!(xml.contains(
        "<url><loc>https://example.com/seal-a-window</loc><lastmod>2024-10-01T08:00:00Z</lastmod><changefreq>weekly</changefreq><priority>0.8</priority></url>"
    ));
    assert!(xml.contains("<loc>https://example.com/undated</loc><lastmod>2025-01-15T12:00:00Z</lastmod>"));
}

#[tokio::test]
async fn sitemap_degrades_to_static_pages() {
    let app = support::make_test_router(InMemoryArticles::unreachable());
    let resp = app.oneshot(support::get("/sitemap.xml")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let xml = support::body_string(resp).await;
    assert_eq!(xml.matches("<url>").count(), 2);
}

#[tokio::test]
async fn robots_points_at_sitemap() {
    let app = support::make_test_router(InMemoryArticles::default());
    let resp = app.oneshot(support::get("/robots.txt")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::body_string(resp).await;
    assert!(body.contains("Disallow: /*/feed/"));
    assert!(body.ends_with("Sitemap: https://example.com/sitemap.xml\n"));
}

#[tokio::test]
async fn retired_paths_redirect_permanently() {
    let cases = [
        ("/home", "/"),
        ("/contact", "/about"),
        ("/feed", "/articles"),
        ("/old-post/feed/", "/articles"),
        ("/tag/cleaning", "/articles"),
        ("/category/garage/page/2", "/articles"),
        (
            "/%F0%9F%8F%A1-how-do-some-people-always-have-a-clean-house-heres-the-real-secret",
            "/",
        ),
    ];
    for (from, to) in cases {
        let app = support::make_test_router(InMemoryArticles::default());
        let resp = app.oneshot(support::get(from)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT, "{from}");
        assert_eq!(location(&resp), to, "{from}");
    }
}

#[tokio::test]
async fn redirect_sources_are_case_sensitive() {
    let app = support::make_test_router(InMemoryArticles::default());
    let resp = app.oneshot(support::get("/HOME")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn static_pages_and_health_are_served() {
    for path in ["/about", "/privacy-policy", "/health", "/api-docs/openapi.json"] {
        let app = support::make_test_router(InMemoryArticles::default());
        let resp = app.oneshot(support::get(path)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
    }
}
