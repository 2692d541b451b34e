//! Published-article lookup.
//!
//! Store failures never reach the page: they are logged and collapse into
//! "not found" (or an empty related list), so a reader sees the same view
//! whether the article is missing or the store is down.

use std::sync::Arc;

use tracing::{debug, warn};
use travthru_store::{Article, ArticleQuery, ArticleStore};

/// Read-only article lookup over an [`ArticleStore`].
#[derive(Clone)]
pub struct ArticleFetcher {
    store: Arc<dyn ArticleStore>,
}

impl ArticleFetcher {
    /// Create a fetcher over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    /// Fetch the published article with `slug`.
    ///
    /// Returns `None` for an empty slug (without querying), when no published
    /// article matches, or when the store fails. If the store holds several
    /// published articles with the same slug, the first one it returns wins.
    #[must_use]
    pub fn fetch_by_slug(&self, slug: &str) -> Option<Article> {
        if slug.is_empty() {
            debug!("Empty slug, skipping article lookup");
            return None;
        }

        let query = ArticleQuery::published().with_slug(slug).with_limit(1);
        match self.store.query(&query) {
            Ok(articles) => {
                let found = articles.into_iter().next();
                if found.is_none() {
                    debug!(slug = %slug, "No published article");
                }
                found
            }
            Err(e) => {
                warn!(slug = %slug, error = %e, "Article lookup failed");
                None
            }
        }
    }

    /// Fetch up to `limit` published articles other than `exclude_slug`.
    ///
    /// One extra article is requested so the current one can be dropped
    /// client-side without shrinking the list. Store order is kept.
    #[must_use]
    pub fn fetch_related(&self, exclude_slug: &str, limit: usize) -> Vec<Article> {
        if limit == 0 {
            return Vec::new();
        }

        let query = ArticleQuery::published().with_limit(limit.saturating_add(1));
        match self.store.query(&query) {
            Ok(articles) => articles
                .into_iter()
                .filter(|article| article.slug != exclude_slug)
                .take(limit)
                .collect(),
            Err(e) => {
                warn!(exclude = %exclude_slug, error = %e, "Related article lookup failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use travthru_store::{MockStore, StoreErrorKind};

    use super::*;

    fn fetcher(store: &Arc<MockStore>) -> ArticleFetcher {
        ArticleFetcher::new(Arc::clone(store) as Arc<dyn ArticleStore>)
    }

    #[test]
    fn test_fetch_by_slug_found() {
        let store = Arc::new(
            MockStore::new()
                .with_published("genting-highlands-day-trip", "Genting Highlands Day Trip")
                .with_published("klia-airport-transfer-guide", "KLIA Airport Transfer Guide"),
        );

        let article = fetcher(&store)
            .fetch_by_slug("klia-airport-transfer-guide")
            .unwrap();

        assert_eq!(article.title, "KLIA Airport Transfer Guide");
        assert_eq!(
            store.queries(),
            vec![
                ArticleQuery::published()
                    .with_slug("klia-airport-transfer-guide")
                    .with_limit(1)
            ]
        );
    }

    #[test]
    fn test_fetch_by_slug_unpublished_is_not_found() {
        let store = Arc::new(MockStore::new().with_unpublished("draft-post", "Draft"));

        assert!(fetcher(&store).fetch_by_slug("draft-post").is_none());
    }

    #[test]
    fn test_fetch_by_slug_missing() {
        let store = Arc::new(MockStore::new().with_published("a", "A"));

        assert!(fetcher(&store).fetch_by_slug("b").is_none());
    }

    #[test]
    fn test_fetch_by_slug_empty_slug_skips_store() {
        let store = Arc::new(MockStore::new().with_published("", "No slug"));

        assert!(fetcher(&store).fetch_by_slug("").is_none());
        assert!(store.queries().is_empty());
    }

    #[test]
    fn test_fetch_by_slug_store_error_is_not_found() {
        let store = Arc::new(
            MockStore::new()
                .with_published("a", "A")
                .with_failure(StoreErrorKind::Unavailable),
        );

        assert!(fetcher(&store).fetch_by_slug("a").is_none());
    }

    #[test]
    fn test_fetch_by_slug_duplicate_first_wins() {
        let store = Arc::new(
            MockStore::new()
                .with_published("dup", "First")
                .with_published("dup", "Second"),
        );

        assert_eq!(fetcher(&store).fetch_by_slug("dup").unwrap().title, "First");
    }

    #[test]
    fn test_fetch_related_excludes_current() {
        let store = Arc::new(
            MockStore::new()
                .with_published("current", "Current")
                .with_published("b", "B")
                .with_published("c", "C"),
        );

        let related = fetcher(&store).fetch_related("current", 2);

        let slugs: Vec<_> = related.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "c"]);
        assert_eq!(
            store.queries(),
            vec![ArticleQuery::published().with_limit(3)]
        );
    }

    #[test]
    fn test_fetch_related_truncates_when_current_absent() {
        let store = Arc::new(
            MockStore::new()
                .with_published("a", "A")
                .with_published("b", "B")
                .with_published("c", "C")
                .with_published("d", "D"),
        );

        let related = fetcher(&store).fetch_related("zzz", 2);

        assert_eq!(related.len(), 2);
        assert_eq!(related[0].slug, "a");
    }

    #[test]
    fn test_fetch_related_skips_unpublished() {
        let store = Arc::new(
            MockStore::new()
                .with_unpublished("draft", "Draft")
                .with_published("current", "Current")
                .with_published("b", "B"),
        );

        let related = fetcher(&store).fetch_related("current", 2);

        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "b");
    }

    #[test]
    fn test_fetch_related_store_error_is_empty() {
        let store = Arc::new(MockStore::new().with_failure(StoreErrorKind::Timeout));

        assert!(fetcher(&store).fetch_related("a", 2).is_empty());
    }

    #[test]
    fn test_fetch_related_zero_limit() {
        let store = Arc::new(MockStore::new().with_published("a", "A"));

        assert!(fetcher(&store).fetch_related("x", 0).is_empty());
        assert!(store.queries().is_empty());
    }
}
