//! Error types for the HTTP server.

use std::net::AddrParseError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No published article with the given slug.
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    /// Blocking lookup task panicked or was cancelled.
    #[error("Lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Invalid bind address.
    #[error("Invalid address: {0}")]
    Address(#[from] AddrParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::ArticleNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Article not found", "slug": slug}),
            ),
            Self::Task(_) | Self::Address(_) | Self::Io(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = ServerError::ArticleNotFound("nope".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_io_status() {
        let error = ServerError::from(std::io::Error::other("boom"));

        assert_eq!(error.to_string(), "I/O error: boom");
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
