use super::ArticleQueryService;
use crate::domain::article::{Article, ArticleSlug};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Look up one article. `None` covers a blank slug, a slug the backend
    /// does not know, and a backend that could not be queried.
    pub async fn get_article_by_slug(&self, query: GetArticleBySlugQuery) -> Option<Article> {
        let slug = match ArticleSlug::new(query.slug) {
            Ok(slug) => slug,
            Err(err) => {
                tracing::debug!(error = %err, "rejected article lookup");
                return None;
            }
        };

        match self.read_repo.find_by_slug(&slug).await {
            Ok(Some(article)) if article.slug == slug => Some(article),
            Ok(Some(article)) => {
                tracing::warn!(
                    requested = %slug,
                    returned = %article.slug,
                    "backend returned a different article than requested"
                );
                None
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, slug = %slug, "article lookup failed; serving not-found");
                None
            }
        }
    }
}
