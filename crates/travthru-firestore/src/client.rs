//! Firestore REST API client.
//!
//! Provides a sync HTTP client for the `documents:runQuery` endpoint,
//! authenticated with a web API key as the public site does.

use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use tracing::{debug, warn};
use travthru_store::{Article, ArticleQuery, ArticleStore, StoreError};
use ureq::Agent;

use crate::error::FirestoreError;
use crate::query::RunQueryRequest;
use crate::value::RunQueryResponse;

/// Public Firestore REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Database used when none is configured.
pub const DEFAULT_DATABASE: &str = "(default)";

/// Collection holding the articles.
pub const DEFAULT_COLLECTION: &str = "car-rental-articles";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Firestore REST API client.
pub struct FirestoreClient {
    agent: Agent,
    base_url: String,
    project_id: String,
    database: String,
    collection: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    /// Create a client for `project_id` with default database, collection
    /// and timeout.
    #[must_use]
    pub fn new(project_id: &str) -> Self {
        Self {
            agent: build_agent(Duration::from_secs(DEFAULT_TIMEOUT)),
            base_url: DEFAULT_BASE_URL.to_owned(),
            project_id: project_id.to_owned(),
            database: DEFAULT_DATABASE.to_owned(),
            collection: DEFAULT_COLLECTION.to_owned(),
            api_key: None,
        }
    }

    /// Authenticate requests with a web API key. Empty keys are ignored.
    #[must_use]
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_owned()).filter(|key| !key.is_empty());
        self
    }

    /// Use a named database instead of `(default)`.
    #[must_use]
    pub fn with_database(mut self, database: &str) -> Self {
        database.clone_into(&mut self.database);
        self
    }

    /// Query a different collection.
    #[must_use]
    pub fn with_collection(mut self, collection: &str) -> Self {
        collection.clone_into(&mut self.collection);
        self
    }

    /// Override the API endpoint (e.g. a local emulator).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Set the global request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = build_agent(timeout);
        self
    }

    /// Collection this client queries.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// `runQuery` endpoint for the configured project and database.
    fn run_query_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents:runQuery",
            self.base_url,
            utf8_percent_encode(&self.project_id, PATH_SEGMENT),
            utf8_percent_encode(&self.database, PATH_SEGMENT)
        )
    }

    /// Execute a structured query and decode the returned documents.
    pub(crate) fn run_query(&self, query: &ArticleQuery) -> Result<Vec<Article>, FirestoreError> {
        let url = self.run_query_url();
        let body = RunQueryRequest::new(&self.collection, query);

        debug!(collection = %self.collection, ?query, "Running Firestore query");

        let mut request = self
            .agent
            .post(&url)
            .header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request.query("key", key);
        }
        let response = request.send_json(&body)?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(FirestoreError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let entries: Vec<RunQueryResponse> = body_reader.read_json()?;
        let articles = decode_documents(entries);
        debug!(count = articles.len(), "Firestore query returned");
        Ok(articles)
    }
}

fn build_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Keep response order; skip progress entries and documents that do not
/// decode as articles.
fn decode_documents(entries: Vec<RunQueryResponse>) -> Vec<Article> {
    entries
        .into_iter()
        .filter_map(|entry| entry.document)
        .filter_map(|document| {
            let name = document.name.clone();
            match document.into_article() {
                Ok(article) => Some(article),
                Err(e) => {
                    warn!(document = %name, error = %e, "Skipping malformed article document");
                    None
                }
            }
        })
        .collect()
}

impl ArticleStore for FirestoreClient {
    fn query(&self, query: &ArticleQuery) -> Result<Vec<Article>, StoreError> {
        self.run_query(query)
            .map_err(|e| e.into_store_error(&self.collection))
    }
}
