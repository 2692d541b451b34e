//! Article page state and view data.

use chrono::{DateTime, Utc};
use serde::Serialize;
use travthru_store::Article;

/// Image shown when an article has no hero image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-article.jpg";

/// Shown when an article has no creation date.
const UNDATED_LABEL: &str = "Recently Published";

/// Document metadata for the page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// `<title>` text: `"<article title> | <site name>"`.
    pub title: String,
    /// `<meta name="description">` content (the article excerpt).
    pub description: String,
}

impl PageMeta {
    /// Metadata for a found article.
    #[must_use]
    pub fn for_article(article: &Article, site_name: &str) -> Self {
        Self {
            title: format!("{} | {site_name}", article.title),
            description: article.excerpt.clone(),
        }
    }
}

/// Article fields shown above the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleHeader {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    /// Hero image, [`PLACEHOLDER_IMAGE`] when unset.
    pub image: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Long date (`5 March 2024`) or "Recently Published".
    pub published_label: String,
}

impl From<&Article> for ArticleHeader {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            slug: article.slug.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            author: article.author.clone(),
            image: image_or_placeholder(&article.image),
            created_at: article.created_at,
            published_label: article.created_at.map_or_else(
                || UNDATED_LABEL.to_owned(),
                |date| date.format("%-d %B %Y").to_string(),
            ),
        }
    }
}

/// Card for another article, listed under the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedArticle {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Card image, [`PLACEHOLDER_IMAGE`] when unset.
    pub image: String,
    /// Link to the article page.
    pub href: String,
}

impl From<&Article> for RelatedArticle {
    fn from(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            image: image_or_placeholder(&article.image),
            href: format!("/articles/{}", article.slug),
        }
    }
}

fn image_or_placeholder(image: &str) -> String {
    if image.is_empty() {
        PLACEHOLDER_IMAGE.to_owned()
    } else {
        image.to_owned()
    }
}

/// Everything needed to display a found article.
///
/// The body is rendered once, when the view is built, and never re-rendered
/// for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    pub meta: PageMeta,
    pub article: ArticleHeader,
    /// Sanitized body HTML.
    pub content: String,
    pub related: Vec<RelatedArticle>,
}

/// Article page lifecycle.
///
/// A page starts in [`ArticlePage::Loading`] and resolves exactly once to
/// either [`ArticlePage::Found`] or [`ArticlePage::NotFound`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ArticlePage {
    /// Lookup in progress.
    #[default]
    Loading,
    /// Published article found and rendered.
    Found(Box<ArticleView>),
    /// No published article (or the store failed).
    NotFound,
}

impl ArticlePage {
    /// A page that has not been resolved yet.
    #[must_use]
    pub fn loading() -> Self {
        Self::Loading
    }

    /// Resolve a loading page with the lookup outcome.
    ///
    /// Already-resolved pages are returned unchanged.
    #[must_use]
    pub fn resolve(self, view: Option<ArticleView>) -> Self {
        match self {
            Self::Loading => view.map_or(Self::NotFound, |view| Self::Found(Box::new(view))),
            resolved => {
                tracing::debug!("Ignoring resolution of an already resolved page");
                resolved
            }
        }
    }

    /// Whether the lookup is still in progress.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The found article, if any.
    #[must_use]
    pub fn view(&self) -> Option<&ArticleView> {
        match self {
            Self::Found(view) => Some(view),
            Self::Loading | Self::NotFound => None,
        }
    }

    /// Page metadata (only for found articles).
    #[must_use]
    pub fn meta(&self) -> Option<&PageMeta> {
        self.view().map(|view| &view.meta)
    }
}
