use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, category::CategoryReadRepository};

/// Read access to the catalog for page handlers.
///
/// Every method absorbs backend failures: the failure is logged and the
/// caller receives the same value it would get for a missing document or an
/// empty catalog.
pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
        }
    }
}
