//! Sitemap and robots policy derived from the live slug set.

use crate::application::render::escape_html;
use crate::domain::article::SlugEntry;
use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;
use std::fmt::Write as _;

/// Characters escaped when a slug is placed in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const DISALLOWED_PATHS: [&str; 3] = ["/feed/", "/*/feed/", "/comments/feed/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

fn base(site_url: &str) -> &str {
    site_url.trim_end_matches('/')
}

pub fn sitemap_entries(site_url: &str, slugs: Vec<SlugEntry>, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = base(site_url);
    let mut entries = vec![
        SitemapEntry {
            loc: base.to_string(),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 1.0,
        },
        SitemapEntry {
            loc: format!("{base}/articles"),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 0.9,
        },
    ];
    entries.extend(slugs.into_iter().map(|entry| SitemapEntry {
        loc: format!(
            "{base}/{}",
            utf8_percent_encode(entry.slug.as_str(), PATH_SEGMENT)
        ),
        last_modified: entry.published_at.unwrap_or(now),
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    }));
    entries
}

pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let _ = writeln!(
            xml,
            "<url><loc>{}</loc><lastmod>{}</lastmod><changefreq>{}</changefreq><priority>{:.1}</priority></url>",
            escape_html(&entry.loc),
            entry.last_modified.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            entry.change_frequency.as_str(),
            entry.priority
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(site_url: &str) -> String {
    let mut out = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED_PATHS {
        let _ = writeln!(out, "Disallow: {path}");
    }
    let _ = writeln!(out, "\nSitemap: {}/sitemap.xml", base(site_url));
    out
}
