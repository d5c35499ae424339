//! Rich-text content as stored on an article: an ordered list of blocks,
//! each holding inline spans decorated with marks.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

/// One structural unit of rich text. Block order is render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading { level: HeadingLevel, spans: Vec<Span> },
    Paragraph { spans: Vec<Span> },
    ListItem { kind: ListKind, spans: Vec<Span> },
    Image { src: String, alt: Option<String> },
    /// Any block whose tag or style is not one of the above. Rendering keeps
    /// the text of its spans.
    Unknown { tag: String, spans: Vec<Span> },
}

impl ContentBlock {
    pub fn paragraph(spans: Vec<Span>) -> Self {
        Self::Paragraph { spans }
    }

    pub fn heading(level: HeadingLevel, spans: Vec<Span>) -> Self {
        Self::Heading { level, spans }
    }

    pub fn list_item(kind: ListKind, spans: Vec<Span>) -> Self {
        Self::ListItem { kind, spans }
    }

    /// Plain text of the block, used for the meta description fallback.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Heading { spans, .. }
            | Self::Paragraph { spans }
            | Self::ListItem { spans, .. }
            | Self::Unknown { spans, .. } => spans.iter().map(|span| span.text.as_str()).collect(),
            Self::Image { alt, .. } => alt.clone().unwrap_or_default(),
        }
    }
}

/// A run of text. Marks are listed innermost first: `[Strong, Link]` means
/// the bold text sits inside the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub marks: Vec<Mark>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Strong,
    Emphasis,
    Code,
    /// `href` is kept raw; a missing or unusable value renders unlinked.
    Link { href: Option<String> },
    Unknown(String),
}

impl Mark {
    pub fn link(href: impl Into<String>) -> Self {
        Self::Link {
            href: Some(href.into()),
        }
    }
}
