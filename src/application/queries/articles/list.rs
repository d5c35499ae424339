use super::ArticleQueryService;
use crate::domain::article::{ArticleFilter, ArticleSummary};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub category: Option<String>,
}

impl ArticleQueryService {
    /// Articles newest first. Equal timestamps keep the order the backend
    /// returned them in; undated articles go last.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> Vec<ArticleSummary> {
        let filter = ArticleFilter {
            category: query
                .category
                .map(|category| category.trim().to_string())
                .filter(|category| !category.is_empty()),
        };

        let mut articles = match self.read_repo.list(&filter).await {
            Ok(articles) => articles,
            Err(err) => {
                tracing::warn!(error = %err, category = ?filter.category, "article listing failed; serving empty list");
                return Vec::new();
            }
        };

        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::queries::articles::test_support::{
        StubArticles, StubCategories, article,
    };
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn service(articles: StubArticles) -> ArticleQueryService {
        ArticleQueryService::new(Arc::new(articles), Arc::new(StubCategories::default()))
    }

    fn slugs(articles: &[ArticleSummary]) -> Vec<&str> {
        articles.iter().map(|a| a.slug.as_str()).collect()
    }

    #[tokio::test]
    async fn orders_newest_first_and_keeps_ties_stable() {
        let jan = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap();
        let mar = Utc.with_ymd_and_hms(2025, 3, 2, 8, 0, 0).unwrap();
        let service = service(StubArticles::with(vec![
            article("tie-first", Some(jan)),
            article("undated", None),
            article("newest", Some(mar)),
            article("tie-second", Some(jan)),
        ]));

        let listed = service.list_articles(ListArticlesQuery::default()).await;
        assert_eq!(
            slugs(&listed),
            vec!["newest", "tie-first", "tie-second", "undated"]
        );
    }

    #[tokio::test]
    async fn filters_by_category_title() {
        let mut garage = article("garage-shelving", None);
        garage.categories = vec!["Garage".into()];
        let kitchen = article("kitchen-sink", None);
        let service = service(StubArticles::with(vec![garage, kitchen]));

        let listed = service
            .list_articles(ListArticlesQuery {
                category: Some(" Garage ".into()),
            })
            .await;
        assert_eq!(slugs(&listed), vec!["garage-shelving"]);
    }

    #[tokio::test]
    async fn blank_category_means_no_filter() {
        let service = service(StubArticles::with(vec![
            article("one", None),
            article("two", None),
        ]));
        let listed = service
            .list_articles(ListArticlesQuery {
                category: Some(String::new()),
            })
            .await;
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn backend_failure_degrades_to_empty() {
        let service = service(StubArticles::failing());
        assert!(service.list_articles(ListArticlesQuery::default()).await.is_empty());
    }
}
