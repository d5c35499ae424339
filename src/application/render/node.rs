use crate::domain::content::ListKind;
use serde::Serialize;

/// Presentational output of the renderer, independent of the final markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedNode {
    Heading { level: u8, children: Vec<Inline> },
    Paragraph { children: Vec<Inline> },
    List { kind: ListKind, items: Vec<Vec<Inline>> },
    Image { src: String, alt: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text {
        text: String,
    },
    Strong {
        children: Vec<Inline>,
    },
    Emphasis {
        children: Vec<Inline>,
    },
    Code {
        children: Vec<Inline>,
    },
    Link {
        href: String,
        /// Opens in a new browsing context and carries `nofollow`.
        external: bool,
        children: Vec<Inline>,
    },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}
