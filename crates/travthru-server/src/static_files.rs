//! Static assets.
//!
//! The article script is compiled into the binary.

use std::sync::Arc;

use axum::Router;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use travthru_site::ARTICLE_SCRIPT_PATH;

use crate::state::AppState;

/// Copy and share button handlers for article pages.
const ARTICLE_JS: &str = include_str!("../assets/article.js");

/// Create router for static assets.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().route(ARTICLE_SCRIPT_PATH, get(serve_article_js))
}

async fn serve_article_js() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        ARTICLE_JS,
    )
}
