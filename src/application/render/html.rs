//! HTML serialization of rendered nodes.

use super::node::{Inline, RenderedNode};
use crate::domain::content::ListKind;
use std::fmt::Write as _;

const EXTERNAL_REL: &str = "nofollow noopener noreferrer";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn to_html(nodes: &[RenderedNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &RenderedNode) {
    match node {
        RenderedNode::Heading { level, children } => {
            let _ = write!(out, "<h{level}>");
            write_inlines(out, children);
            let _ = write!(out, "</h{level}>");
        }
        RenderedNode::Paragraph { children } => {
            out.push_str("<p>");
            write_inlines(out, children);
            out.push_str("</p>");
        }
        RenderedNode::List { kind, items } => {
            let tag = match kind {
                ListKind::Bullet => "ul",
                ListKind::Number => "ol",
            };
            let _ = write!(out, "<{tag}>");
            for item in items {
                out.push_str("<li>");
                write_inlines(out, item);
                out.push_str("</li>");
            }
            let _ = write!(out, "</{tag}>");
        }
        RenderedNode::Image { src, alt } => {
            let _ = write!(
                out,
                r#"<figure><img src="{}" alt="{}" loading="lazy"></figure>"#,
                escape_html(src),
                escape_html(alt)
            );
        }
    }
}

fn write_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        write_inline(out, inline);
    }
}

fn write_inline(out: &mut String, inline: &Inline) {
    match inline {
        Inline::Text { text } => out.push_str(&escape_html(text)),
        Inline::Strong { children } => wrap(out, "strong", children),
        Inline::Emphasis { children } => wrap(out, "em", children),
        Inline::Code { children } => wrap(out, "code", children),
        Inline::Link {
            href,
            external,
            children,
        } => {
            let _ = write!(out, r#"<a href="{}""#, escape_html(href));
            if *external {
                let _ = write!(out, r#" target="_blank" rel="{EXTERNAL_REL}""#);
            }
            out.push('>');
            write_inlines(out, children);
            out.push_str("</a>");
        }
    }
}

fn wrap(out: &mut String, tag: &str, children: &[Inline]) {
    let _ = write!(out, "<{tag}>");
    write_inlines(out, children);
    let _ = write!(out, "</{tag}>");
}
