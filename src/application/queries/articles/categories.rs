use super::ArticleQueryService;
use crate::domain::category::Category;

impl ArticleQueryService {
    pub async fn list_categories(&self) -> Vec<Category> {
        match self.category_repo.list().await {
            Ok(categories) => categories,
            Err(err) => {
                tracing::warn!(error = %err, "category listing failed; serving empty list");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::queries::articles::test_support::{StubArticles, StubCategories};
    use std::sync::Arc;

    #[tokio::test]
    async fn passes_categories_through() {
        let service = ArticleQueryService::new(
            Arc::new(StubArticles::default()),
            Arc::new(StubCategories::with(vec![Category::new("Garage", None)])),
        );
        assert_eq!(service.list_categories().await.len(), 1);
    }

    #[tokio::test]
    async fn query_error_degrades_to_empty() {
        let service = ArticleQueryService::new(
            Arc::new(StubArticles::default()),
            Arc::new(StubCategories::failing()),
        );
        assert!(service.list_categories().await.is_empty());
    }
}
