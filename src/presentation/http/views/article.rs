// src/presentation/http/views/article.rs
use super::Head;
use crate::application::{
    pages::ArticlePage,
    render::{LinkTarget, classify, to_html},
};
use askama::Template;

struct ProductLink {
    href: String,
    external: bool,
}

struct ProductView<'a> {
    name: &'a str,
    notes: Option<&'a str>,
    link: Option<ProductLink>,
}

#[derive(Template)]
#[template(path = "article.html")]
pub struct ArticleTemplate<'a> {
    head: Head,
    page: &'a ArticlePage,
    byline: Option<String>,
    products: Vec<ProductView<'a>>,
    steps_html: String,
    body_html: String,
}

impl<'a> ArticleTemplate<'a> {
    pub fn new(page: &'a ArticlePage, site_url: &str) -> Self {
        let head = Head::titled(page.title.clone())
            .described(page.description.as_deref())
            .canonical(site_url, &format!("/{}", page.slug))
            .structured_data(page.structured_data.as_ref());

        let products = page
            .products
            .iter()
            .map(|product| ProductView {
                name: &product.name,
                notes: product.notes.as_deref(),
                link: product
                    .url
                    .as_deref()
                    .and_then(classify)
                    .map(|target| match target {
                        LinkTarget::External(href) => ProductLink {
                            href,
                            external: true,
                        },
                        LinkTarget::Internal(href) => ProductLink {
                            href,
                            external: false,
                        },
                    }),
            })
            .collect();

        Self {
            head,
            page,
            byline: byline(page),
            products,
            steps_html: to_html(&page.steps),
            body_html: to_html(&page.body),
        }
    }
}

fn byline(page: &ArticlePage) -> Option<String> {
    let parts: Vec<String> = page
        .author_name
        .iter()
        .map(|author| format!("By {author}"))
        .chain(page.published_label.iter().cloned())
        .chain(page.category.iter().map(|category| category.title.clone()))
        .collect();
    (!parts.is_empty()).then(|| parts.join(" · "))
}
