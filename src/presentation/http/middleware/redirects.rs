// src/presentation/http/middleware/redirects.rs
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Retired URLs and where they now live. Sources may be percent-encoded.
const PERMANENT_REDIRECTS: &[(&str, &str)] = &[
    (
        "/garage-storage-essentials-clutter-free",
        "/garage-storage-essentials-that-actually-keep-the-clutter-away",
    ),
    ("/home", "/"),
    ("/roborock-s8-maxv-ultra-review-worth-it", "/articles"),
    ("/cirkul-water-bottle-review", "/articles"),
    ("/college-dorm-essentials-checklist", "/articles"),
    ("/best-robot-vacuums-worth-it", "/articles"),
    ("/best-cleaning-essentials", "/articles"),
    ("/home-repair-tools", "/articles"),
    ("/weekly-deals-trusted-picks", "/articles"),
    ("/affiliate-disclosure", "/privacy-policy"),
    ("/contact", "/about"),
    (
        "/%F0%9F%8C%BF-eco-friendly-cleaning-swaps-that-actually-work",
        "/",
    ),
    (
        "/%F0%9F%A7%A0-how-to-stay-on-top-of-housework-with-adhd-or-executive-dysfunction",
        "/",
    ),
    ("/%F0%9F%A7%B0-home-repair-tools-that-make-life-easier", "/"),
    ("/%F0%9F%A7%A0-smart-home-essentials-that-actually-work", "/"),
    (
        "/%F0%9F%A7%BC-minimalist-cleaning-kits-that-actually-work-and-what-to-leave-out",
        "/",
    ),
    (
        "/%F0%9F%8C%AC%EF%B8%8F-the-best-air-purifiers-of-2025-that-actually-work",
        "/",
    ),
    (
        "/%F0%9F%A7%BC-how-to-clean-the-cleaning-machines-so-they-dont-break-down-on-you",
        "/",
    ),
    (
        "/%F0%9F%8F%A1-how-do-some-people-always-have-a-clean-house-heres-the-real-secret",
        "/",
    ),
    ("/how-to-choose-cleaning-tools-that-save-your-back", "/"),
    ("/top-5-cleaning-essentials-every-home-should-have", "/"),
];

/// Path prefixes whose whole subtree moved to the guide index.
const RETIRED_PREFIXES: [&str; 2] = ["/tag", "/category"];

fn decode(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

fn under_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Destination for a retired path, compared both as sent and decoded.
pub fn redirect_target(path: &str) -> Option<&'static str> {
    let raw = normalize(path);
    let decoded = decode(raw);

    for (source, target) in PERMANENT_REDIRECTS {
        if raw == *source || decoded == decode(source) {
            return Some(*target);
        }
    }

    if raw == "/feed" || raw.ends_with("/feed") {
        return Some("/articles");
    }
    if RETIRED_PREFIXES
        .iter()
        .any(|prefix| under_prefix(raw, prefix))
    {
        return Some("/articles");
    }
    None
}

pub async fn redirect_retired_paths(req: Request<Body>, next: Next) -> Response {
    if let Some(target) = redirect_target(req.uri().path()) {
        tracing::debug!(from = %req.uri().path(), to = target, "permanent redirect");
        return Redirect::permanent(target).into_response();
    }
    next.run(req).await
}
