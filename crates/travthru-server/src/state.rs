//! Application state.

use std::sync::Arc;

use travthru_site::ArticleSite;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Article lookup and page rendering.
    pub(crate) site: Arc<ArticleSite>,
}
