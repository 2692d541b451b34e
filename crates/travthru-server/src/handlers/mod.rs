//! HTTP request handlers.

pub(crate) mod api;
pub(crate) mod health;
pub(crate) mod pages;

use std::sync::Arc;

use travthru_site::ArticlePage;

use crate::error::ServerError;
use crate::state::AppState;

/// Resolve the page for `slug` on the blocking pool.
///
/// The store client performs blocking HTTP, so the lookup must not run on
/// the async worker threads.
pub(crate) async fn load_page(state: &AppState, slug: String) -> Result<ArticlePage, ServerError> {
    let site = Arc::clone(&state.site);
    let page = tokio::task::spawn_blocking(move || site.load(&slug)).await?;
    Ok(page)
}
