// src/application/commands/subscribers/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::subscriber::SubscriberRepository};

pub struct SubscriberCommandService {
    pub(super) repo: Arc<dyn SubscriberRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) default_source: String,
}

impl SubscriberCommandService {
    pub fn new(
        repo: Arc<dyn SubscriberRepository>,
        clock: Arc<dyn Clock>,
        default_source: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            clock,
            default_source: default_source.into(),
        }
    }
}
