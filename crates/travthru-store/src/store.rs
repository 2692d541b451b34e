//! Store trait and error types.
//!
//! Provides the core [`ArticleStore`] trait for querying articles, along with
//! [`StoreError`] for unified error handling across backends.

use crate::article::{Article, ArticleQuery};

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Collection or database does not exist.
    NotFound,
    /// Credentials rejected.
    PermissionDenied,
    /// Query rejected by the backend.
    InvalidQuery,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Too many requests.
    RateLimited,
    /// Operation timed out.
    Timeout,
    /// Response could not be decoded.
    Decode,
    /// Other/unknown error category.
    Other,
}

/// Retry guidance.
#[derive(Debug, PartialEq, Eq, Default)]
pub enum ErrorStatus {
    /// Don't retry (bad credentials, invalid query).
    #[default]
    Permanent,
    /// Retry immediately (timeout, connection reset).
    Temporary,
    /// Retry with backoff (rate limited, service unavailable).
    Persistent,
}

/// Store error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    /// Semantic error category.
    pub kind: StoreErrorKind,
    /// Retry guidance.
    pub status: ErrorStatus,
    /// Collection context (if applicable).
    pub collection: Option<String>,
    /// Backend identifier (e.g., "Firestore", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            status: ErrorStatus::Permanent,
            collection: None,
            backend: None,
            source: None,
        }
    }

    /// Attach collection context.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set retry status.
    #[must_use]
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Map an HTTP status code from a store backend to an error.
    #[must_use]
    pub fn from_http_status(status: u16) -> Self {
        let (kind, retry) = match status {
            401 | 403 => (StoreErrorKind::PermissionDenied, ErrorStatus::Permanent),
            400 => (StoreErrorKind::InvalidQuery, ErrorStatus::Permanent),
            404 => (StoreErrorKind::NotFound, ErrorStatus::Permanent),
            408 | 504 => (StoreErrorKind::Timeout, ErrorStatus::Temporary),
            429 => (StoreErrorKind::RateLimited, ErrorStatus::Persistent),
            502 | 503 => (StoreErrorKind::Unavailable, ErrorStatus::Persistent),
            _ => (StoreErrorKind::Other, ErrorStatus::Permanent),
        };
        Self::new(kind).with_status(retry)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (collection: name)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::PermissionDenied => "Permission denied",
            StoreErrorKind::InvalidQuery => "Invalid query",
            StoreErrorKind::Unavailable => "Unavailable",
            StoreErrorKind::RateLimited => "Rate limited",
            StoreErrorKind::Timeout => "Timeout",
            StoreErrorKind::Decode => "Decode error",
            StoreErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(collection) = &self.collection {
            write!(f, " (collection: {collection})")?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only access to articles.
///
/// Implementations translate an [`ArticleQuery`] into their backend's query
/// language. Every filter is an equality match; results keep the backend's
/// order and never exceed `query.limit`.
pub trait ArticleStore: Send + Sync {
    /// Run a query and return matching articles.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be reached, rejects the
    /// query, or returns a response that cannot be decoded.
    fn query(&self, query: &ArticleQuery) -> Result<Vec<Article>, StoreError>;
}
