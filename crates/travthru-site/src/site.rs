//! Article site: lookup, rendering and page assembly.

use std::sync::Arc;

use tracing::info;
use travthru_store::{Article, ArticleStore};

use crate::fetcher::ArticleFetcher;
use crate::page::{ArticleHeader, ArticlePage, ArticleView, PageMeta, RelatedArticle};
use crate::renderer::ArticleRenderer;
use crate::template;

/// Site-wide settings for article pages.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Appended to page titles.
    pub site_name: String,
    /// Maximum number of related articles.
    pub related_limit: usize,
    /// Booking link for the call-to-action.
    pub whatsapp_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "TRAVTHRU".to_owned(),
            related_limit: 2,
            whatsapp_url: "https://wa.me/60107198186".to_owned(),
        }
    }
}

/// Article pages backed by a store.
///
/// Each [`ArticleSite::load`] call owns its own lookup; nothing is shared
/// between calls besides the store handle.
pub struct ArticleSite {
    fetcher: ArticleFetcher,
    renderer: ArticleRenderer,
    settings: SiteSettings,
}

impl ArticleSite {
    /// Create a site over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ArticleStore>, settings: SiteSettings) -> Self {
        Self {
            fetcher: ArticleFetcher::new(store),
            renderer: ArticleRenderer::new(),
            settings,
        }
    }

    /// Replace the body renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: ArticleRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Site settings.
    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Resolve the page for `slug`.
    ///
    /// Related articles are only looked up after the article itself was
    /// found.
    #[must_use]
    pub fn load(&self, slug: &str) -> ArticlePage {
        let page = ArticlePage::loading();
        let view = self.fetcher.fetch_by_slug(slug).map(|article| {
            let related = self
                .fetcher
                .fetch_related(&article.slug, self.settings.related_limit);
            self.build_view(&article, &related)
        });
        let page = page.resolve(view);

        match &page {
            ArticlePage::Found(view) => {
                info!(slug = %slug, related = view.related.len(), "Article page resolved");
            }
            _ => info!(slug = %slug, "Article not found"),
        }
        page
    }

    /// Assemble the view for a found article, rendering its body once.
    #[must_use]
    pub fn build_view(&self, article: &Article, related: &[Article]) -> ArticleView {
        ArticleView {
            meta: PageMeta::for_article(article, &self.settings.site_name),
            article: ArticleHeader::from(article),
            content: self.renderer.render(&article.content),
            related: related.iter().map(RelatedArticle::from).collect(),
        }
    }

    /// Render a full HTML document for `page`.
    #[must_use]
    pub fn render_html(&self, page: &ArticlePage) -> String {
        template::render_page(page, &self.settings)
    }
}
