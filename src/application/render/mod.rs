//! Rich-text renderer: maps content blocks to presentational nodes.
//!
//! Blocks are dispatched on their variant with an explicit default arm for
//! unrecognized tags, which render as paragraphs of their spans. Marks fold
//! around the text in the order they are recorded, innermost first.
//! Consecutive list items of the same kind share one list container.

mod html;
mod links;
mod node;

pub use html::{escape_html, to_html};
pub use links::{LinkTarget, classify};
pub use node::{Inline, RenderedNode};

use crate::domain::content::{ContentBlock, ListKind, Mark, Span};

/// Render an optional block sequence. Absent and empty input both yield an
/// empty output.
pub fn render(blocks: Option<&[ContentBlock]>) -> Vec<RenderedNode> {
    let Some(blocks) = blocks else {
        return Vec::new();
    };

    let mut out: Vec<RenderedNode> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match block {
            ContentBlock::Heading { level, spans } => out.push(RenderedNode::Heading {
                level: level.as_u8(),
                children: render_spans(spans),
            }),
            ContentBlock::Paragraph { spans } => out.push(RenderedNode::Paragraph {
                children: render_spans(spans),
            }),
            ContentBlock::ListItem { kind, spans } => push_list_item(&mut out, *kind, spans),
            ContentBlock::Image { src, alt } => {
                if !src.trim().is_empty() {
                    out.push(RenderedNode::Image {
                        src: src.clone(),
                        alt: alt.clone().unwrap_or_default(),
                    });
                }
            }
            ContentBlock::Unknown { tag, spans } => {
                tracing::debug!(tag = %tag, "rendering unrecognized block as paragraph");
                if !spans.is_empty() {
                    out.push(RenderedNode::Paragraph {
                        children: render_spans(spans),
                    });
                }
            }
        }
    }
    out
}

fn push_list_item(out: &mut Vec<RenderedNode>, kind: ListKind, spans: &[Span]) {
    let item = render_spans(spans);
    if let Some(RenderedNode::List { kind: open, items }) = out.last_mut() {
        if *open == kind {
            items.push(item);
            return;
        }
    }
    out.push(RenderedNode::List {
        kind,
        items: vec![item],
    });
}

fn render_spans(spans: &[Span]) -> Vec<Inline> {
    spans.iter().map(render_span).collect()
}

/// Wrap the span text in each mark, innermost first.
pub fn render_span(span: &Span) -> Inline {
    span.marks
        .iter()
        .fold(Inline::text(span.text.clone()), apply_mark)
}

fn apply_mark(inner: Inline, mark: &Mark) -> Inline {
    match mark {
        Mark::Strong => Inline::Strong {
            children: vec![inner],
        },
        Mark::Emphasis => Inline::Emphasis {
            children: vec![inner],
        },
        Mark::Code => Inline::Code {
            children: vec![inner],
        },
        Mark::Link { href } => match href.as_deref().and_then(classify) {
            Some(target) => Inline::Link {
                external: target.is_external(),
                href: target.href().to_string(),
                children: vec![inner],
            },
            None => inner,
        },
        Mark::Unknown(name) => {
            tracing::debug!(mark = %name, "ignoring unrecognized mark");
            inner
        }
    }
}
