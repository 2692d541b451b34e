//! Error types for the Firestore backend.

use travthru_store::{ErrorStatus, StoreError, StoreErrorKind};

/// Error from Firestore REST operations.
#[derive(Debug, thiserror::Error)]
pub enum FirestoreError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body is not a valid `runQuery` response.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl FirestoreError {
    fn kind_and_status(&self) -> (StoreErrorKind, ErrorStatus) {
        match self {
            Self::HttpRequest(ureq::Error::Timeout(_)) => {
                (StoreErrorKind::Timeout, ErrorStatus::Temporary)
            }
            Self::HttpRequest(
                ureq::Error::Io(_) | ureq::Error::ConnectionFailed | ureq::Error::HostNotFound,
            ) => (StoreErrorKind::Unavailable, ErrorStatus::Temporary),
            Self::HttpRequest(_) => (StoreErrorKind::Other, ErrorStatus::Permanent),
            Self::HttpResponse { status, .. } => {
                let mapped = StoreError::from_http_status(*status);
                (mapped.kind, mapped.status)
            }
            Self::Json(_) => (StoreErrorKind::Decode, ErrorStatus::Permanent),
        }
    }

    /// Convert into a [`StoreError`] tagged with the collection name.
    #[must_use]
    pub fn into_store_error(self, collection: &str) -> StoreError {
        let (kind, status) = self.kind_and_status();
        StoreError::new(kind)
            .with_status(status)
            .with_backend("Firestore")
            .with_collection(collection)
            .with_source(self)
    }
}
