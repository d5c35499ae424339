// src/presentation/http/views/static_pages.rs
use super::Head;
use askama::Template;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    head: Head,
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self {
            head: Head::titled("Page not found"),
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    head: Head,
}

impl AboutTemplate {
    pub fn new(site_url: &str) -> Self {
        Self {
            head: Head::titled("About")
                .described(Some("Who writes our home guides and how we test them."))
                .canonical(site_url, "/about"),
        }
    }
}

#[derive(Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    head: Head,
}

impl PrivacyTemplate {
    pub fn new(site_url: &str) -> Self {
        Self {
            head: Head::titled("Privacy Policy").canonical(site_url, "/privacy-policy"),
        }
    }
}
