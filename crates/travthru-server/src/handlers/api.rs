//! Articles API endpoint.
//!
//! Returns the same view the HTML page is built from: metadata, header
//! fields, sanitized body and related cards.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use travthru_site::{ArticlePage, ArticleView};

use crate::error::ServerError;
use crate::handlers::load_page;
use crate::state::AppState;

/// Handle GET /api/articles/{slug}.
pub(crate) async fn get_article(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ArticleView>, ServerError> {
    match load_page(&state, slug.clone()).await? {
        ArticlePage::Found(view) => Ok(Json(*view)),
        ArticlePage::Loading | ArticlePage::NotFound => Err(ServerError::ArticleNotFound(slug)),
    }
}
