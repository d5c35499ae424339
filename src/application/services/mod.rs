// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::subscribers::SubscriberCommandService,
        pages::PageService,
        ports::time::Clock,
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::ArticleReadRepository, category::CategoryReadRepository,
        subscriber::SubscriberRepository,
    },
};

/// Everything a request handler needs, wired once at startup.
pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub subscriber_commands: Arc<SubscriberCommandService>,
    pub pages: Arc<PageService>,
}

pub struct ServiceSettings {
    pub site_url: String,
    pub subscriber_source: String,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        subscriber_repo: Arc<dyn SubscriberRepository>,
        clock: Arc<dyn Clock>,
        settings: ServiceSettings,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
        ));

        let subscriber_commands = Arc::new(SubscriberCommandService::new(
            Arc::clone(&subscriber_repo),
            Arc::clone(&clock),
            settings.subscriber_source,
        ));

        let pages = Arc::new(PageService::new(
            Arc::clone(&article_queries),
            Arc::clone(&clock),
            settings.site_url,
        ));

        Self {
            article_queries,
            subscriber_commands,
            pages,
        }
    }
}
