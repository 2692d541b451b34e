//! Article store abstraction for the TRAVTHRU article pipeline.
//!
//! This crate provides an [`ArticleStore`] trait for reading articles from the
//! remote document store. This enables:
//!
//! - **Unit testing** without a network connection
//! - **Backend flexibility** (Firestore REST today, anything with equality
//!   filters tomorrow)
//! - **Clean separation** between page logic and wire formats
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Article`] and [`ArticleQuery`], the data model and the only query shape
//!   the pipeline issues
//! - [`ArticleStore`] trait with a single read-only `query()` method
//! - [`MockStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use travthru_store::{ArticleQuery, ArticleStore, MockStore};
//!
//! let store = MockStore::new().with_published("klia-guide", "KLIA Guide");
//! let found = store.query(&ArticleQuery::published().with_slug("klia-guide").with_limit(1))?;
//! assert_eq!(found[0].title, "KLIA Guide");
//! ```

mod article;
#[cfg(feature = "mock")]
mod mock;
mod store;

pub use article::{Article, ArticleQuery};
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use store::{ArticleStore, ErrorStatus, StoreError, StoreErrorKind};
