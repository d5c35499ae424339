//! Classification of hyperlink targets.

use url::{ParseError, Url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute `http(s)` URL on another site.
    External(String),
    /// Site-relative path, fragment, or a `mailto:`/`tel:` link.
    Internal(String),
}

impl LinkTarget {
    pub fn href(&self) -> &str {
        match self {
            Self::External(href) | Self::Internal(href) => href,
        }
    }

    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// Returns `None` for hrefs that must not become links: blank values,
/// unsupported schemes such as `javascript:`, and unparsable URLs.
pub fn classify(href: &str) -> Option<LinkTarget> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    if let Some(rest) = href.strip_prefix("//") {
        return Url::parse(&format!("https://{rest}"))
            .ok()
            .filter(|url| url.host().is_some())
            .map(|_| LinkTarget::External(href.to_string()));
    }

    if href.starts_with(['/', '#', '?']) || href.starts_with("./") || href.starts_with("../") {
        return Some(LinkTarget::Internal(href.to_string()));
    }

    match Url::parse(href) {
        Ok(url) => match url.scheme() {
            "http" | "https" if url.host().is_some() => {
                Some(LinkTarget::External(href.to_string()))
            }
            "mailto" | "tel" => Some(LinkTarget::Internal(href.to_string())),
            _ => None,
        },
        Err(ParseError::RelativeUrlWithoutBase) => Some(LinkTarget::Internal(href.to_string())),
        Err(_) => None,
    }
}
