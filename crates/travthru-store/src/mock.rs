//! Mock store implementation for testing.
//!
//! Provides [`MockStore`] for unit testing without network access.

use std::sync::RwLock;

use crate::article::{Article, ArticleQuery};
use crate::store::{ArticleStore, StoreError, StoreErrorKind};

/// Mock store for testing.
///
/// Stores articles in memory in insertion order, which plays the role of the
/// backend's result order. Every query is recorded so tests can assert on
/// what was (or was not) sent to the store.
///
/// # Example
///
/// ```ignore
/// use travthru_store::{ArticleQuery, ArticleStore, MockStore};
///
/// let store = MockStore::new()
///     .with_published("klia-guide", "KLIA Guide")
///     .with_unpublished("draft", "Draft");
///
/// let found = store.query(&ArticleQuery::published()).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    articles: RwLock<Vec<Article>>,
    failure: RwLock<Option<StoreErrorKind>>,
    queries: RwLock<Vec<ArticleQuery>>,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article as-is.
    ///
    /// An empty `id` is replaced with `doc-<n>`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_article(self, mut article: Article) -> Self {
        {
            let mut articles = self.articles.write().unwrap();
            if article.id.is_empty() {
                article.id = format!("doc-{}", articles.len() + 1);
            }
            articles.push(article);
        }
        self
    }

    /// Add a published article with the given slug and title.
    #[must_use]
    pub fn with_published(self, slug: &str, title: &str) -> Self {
        self.with_article(sample(slug, title, true))
    }

    /// Add an unpublished (draft) article with the given slug and title.
    #[must_use]
    pub fn with_unpublished(self, slug: &str, title: &str) -> Self {
        self.with_article(sample(slug, title, false))
    }

    /// Make every subsequent query fail with the given kind.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, kind: StoreErrorKind) -> Self {
        *self.failure.write().unwrap() = Some(kind);
        self
    }

    /// Queries received so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn queries(&self) -> Vec<ArticleQuery> {
        self.queries.read().unwrap().clone()
    }
}

fn sample(slug: &str, title: &str, published: bool) -> Article {
    Article {
        slug: slug.to_owned(),
        title: title.to_owned(),
        excerpt: format!("About {title}"),
        author: "TRAVTHRU Team".to_owned(),
        content: format!("# {title}"),
        published,
        ..Article::default()
    }
}

impl ArticleStore for MockStore {
    fn query(&self, query: &ArticleQuery) -> Result<Vec<Article>, StoreError> {
        self.queries.write().unwrap().push(query.clone());

        if let Some(kind) = *self.failure.read().unwrap() {
            return Err(StoreError::new(kind).with_backend("Mock"));
        }

        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(self
            .articles
            .read()
            .unwrap()
            .iter()
            .filter(|article| query.matches(article))
            .take(limit)
            .cloned()
            .collect())
    }
}
