//! Cloud Firestore backend for the TRAVTHRU article store.
//!
//! Implements [`ArticleStore`](travthru_store::ArticleStore) on top of the
//! Firestore REST API (`documents:runQuery`) with a blocking `ureq` client.
//! Only equality filters and a result limit are ever sent; the pipeline never
//! writes to the database.

mod client;
mod error;
mod query;
mod value;

pub use client::{DEFAULT_BASE_URL, DEFAULT_COLLECTION, DEFAULT_DATABASE, FirestoreClient};
pub use error::FirestoreError;
