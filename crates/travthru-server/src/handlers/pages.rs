//! Article HTML pages.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use travthru_site::ArticlePage;

use crate::error::ServerError;
use crate::handlers::load_page;
use crate::state::AppState;

/// Handle GET /articles/{slug}.
pub(crate) async fn get_article_page(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let page = load_page(&state, slug).await?;
    Ok(page_response(&state, &page))
}

/// Not-found page for unknown routes.
pub(crate) async fn not_found_page(State(state): State<Arc<AppState>>) -> Response {
    page_response(&state, &ArticlePage::NotFound)
}

fn page_response(state: &AppState, page: &ArticlePage) -> Response {
    let status = match page {
        ArticlePage::Found(_) => StatusCode::OK,
        ArticlePage::Loading | ArticlePage::NotFound => StatusCode::NOT_FOUND,
    };
    (status, Html(state.site.render_html(page))).into_response()
}
