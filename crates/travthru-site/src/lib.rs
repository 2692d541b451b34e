//! Article page orchestration for the TRAVTHRU site.
//!
//! This crate provides:
//! - [`ArticleFetcher`]: published-article lookup by slug and related articles
//! - [`ArticleRenderer`]: markdown → enhanced → sanitized body HTML
//! - [`ArticlePage`]: the `Loading → Found | NotFound` page state
//! - [`ArticleSite`]: ties the above together and renders full HTML pages
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use travthru_site::{ArticleSite, SiteSettings};
//! # fn store() -> Arc<dyn travthru_store::ArticleStore> { unimplemented!() }
//!
//! let site = ArticleSite::new(store(), SiteSettings::default());
//! let page = site.load("klia-airport-transfer-guide");
//! let html = site.render_html(&page);
//! ```

mod fetcher;
mod page;
mod renderer;
mod site;
mod template;

pub use fetcher::ArticleFetcher;
pub use page::{ArticleHeader, ArticlePage, ArticleView, PLACEHOLDER_IMAGE, PageMeta, RelatedArticle};
pub use renderer::{ArticleRenderer, RENDER_ERROR_FRAGMENT};
pub use site::{ArticleSite, SiteSettings};
pub use template::{ARTICLE_SCRIPT_PATH, render_page};
