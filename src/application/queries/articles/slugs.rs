use super::ArticleQueryService;
use crate::domain::article::SlugEntry;
use std::collections::BTreeSet;

impl ArticleQueryService {
    /// Every routable slug, for static path enumeration.
    pub async fn list_all_slugs(&self) -> BTreeSet<String> {
        self.slug_entries()
            .await
            .into_iter()
            .map(|entry| entry.slug.into_inner())
            .collect()
    }

    /// Slugs with their publication timestamps, in backend order.
    pub async fn slug_entries(&self) -> Vec<SlugEntry> {
        match self.read_repo.list_slugs().await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, "slug enumeration failed; serving empty set");
                Vec::new()
            }
        }
    }
}
