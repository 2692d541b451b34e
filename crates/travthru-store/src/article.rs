//! Article data model and query shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article document as stored in the `car-rental-articles` collection.
///
/// Field names follow the stored documents (`createdAt`). Missing fields
/// deserialize to their defaults so partially filled CMS entries still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
    /// Store-assigned document ID.
    pub id: String,
    /// URL slug, unique among published articles.
    pub slug: String,
    pub title: String,
    /// Short summary shown under the title and used as meta description.
    pub excerpt: String,
    pub author: String,
    /// Hero image URL (empty when unset).
    pub image: String,
    /// Raw markdown body.
    pub content: String,
    /// Only published articles are ever displayed.
    pub published: bool,
    /// Creation time (display only).
    pub created_at: Option<DateTime<Utc>>,
}

/// Equality-filtered, bounded article query.
///
/// All set filters must match (logical AND). Results keep the store's order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    /// Required slug, if any.
    pub slug: Option<String>,
    /// Required publication state, if any.
    pub published: Option<bool>,
    /// Maximum number of results.
    pub limit: Option<usize>,
}

impl ArticleQuery {
    /// Query for published articles only.
    #[must_use]
    pub fn published() -> Self {
        Self {
            published: Some(true),
            ..Self::default()
        }
    }

    /// Restrict to a single slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Cap the number of results.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `article` satisfies every filter of this query.
    #[must_use]
    pub fn matches(&self, article: &Article) -> bool {
        self.slug.as_deref().is_none_or(|slug| article.slug == slug)
            && self
                .published
                .is_none_or(|published| article.published == published)
    }
}
