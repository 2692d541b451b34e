//! Configuration management for the TRAVTHRU article server.
//!
//! Parses `travthru.toml` with serde and discovers it in the current
//! directory or any parent. CLI settings are applied during load via
//! [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Deployment-specific values support `${VAR}` and `${VAR:-default}`:
//! - `server.host`
//! - `firestore.project_id`
//! - `firestore.api_key`
//! - `contact.whatsapp_url`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "travthru.toml";

/// Upper bound for `articles.related_limit`.
const MAX_RELATED_LIMIT: usize = 10;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override Firestore project ID.
    pub project_id: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Remote article store settings.
    pub firestore: FirestoreConfig,
    /// Article page settings.
    pub articles: ArticlesConfig,
    /// Booking contact shown under every article.
    pub contact: ContactConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Firestore configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FirestoreConfig {
    /// Google Cloud project ID. Required to serve articles.
    pub project_id: String,
    /// Web API key (empty when the database rules allow public reads).
    pub api_key: String,
    /// Database ID.
    pub database: String,
    /// Collection holding the articles.
    pub collection: String,
    /// Global HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// REST endpoint (override for the local emulator).
    pub base_url: String,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_key: String::new(),
            database: "(default)".to_owned(),
            collection: "car-rental-articles".to_owned(),
            timeout_secs: 30,
            base_url: "https://firestore.googleapis.com/v1".to_owned(),
        }
    }
}

impl FirestoreConfig {
    /// HTTP timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate fields needed to reach the store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the project ID is empty, the
    /// timeout is zero, or the endpoint is not an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.project_id, "firestore.project_id")?;
        require_non_empty(&self.database, "firestore.database")?;
        require_non_empty(&self.collection, "firestore.collection")?;
        require_http_url(&self.base_url, "firestore.base_url")?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "firestore.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Article page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ArticlesConfig {
    /// Number of related articles shown under an article.
    pub related_limit: usize,
    /// Site name appended to page titles (`"<title> | <site_name>"`).
    pub site_name: String,
}

impl Default for ArticlesConfig {
    fn default() -> Self {
        Self {
            related_limit: 2,
            site_name: "TRAVTHRU".to_owned(),
        }
    }
}

/// Contact configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Booking link for the "Book on WhatsApp" button.
    pub whatsapp_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_url: "https://wa.me/60107198186".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`firestore.api_key`").
        field: String,
        /// Error message (e.g., "${`FIREBASE_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `travthru.toml` in the current directory and its parents, falling
    /// back to defaults when none exists.
    ///
    /// CLI settings are applied last and take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(project_id) = &settings.project_id {
            self.firestore.project_id.clone_from(project_id);
        }
    }

    /// Get validated Firestore configuration.
    ///
    /// Use this instead of the `firestore` field when the command needs to
    /// reach the store, since the project ID is optional for everything else.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is incomplete.
    pub fn require_firestore(&self) -> Result<&FirestoreConfig, ConfigError> {
        self.firestore.validate()?;
        Ok(&self.firestore)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file. Firestore credentials
    /// are checked separately by [`Config::require_firestore`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_articles()?;
        require_http_url(&self.contact.whatsapp_url, "contact.whatsapp_url")?;
        if self.firestore.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "firestore.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_articles(&self) -> Result<(), ConfigError> {
        let limit = self.articles.related_limit;
        if !(1..=MAX_RELATED_LIMIT).contains(&limit) {
            return Err(ConfigError::Validation(format!(
                "articles.related_limit must be between 1 and {MAX_RELATED_LIMIT}"
            )));
        }
        require_non_empty(&self.articles.site_name, "articles.site_name")
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.firestore.project_id =
            expand::expand_env(&self.firestore.project_id, "firestore.project_id")?;
        self.firestore.api_key = expand::expand_env(&self.firestore.api_key, "firestore.api_key")?;
        self.contact.whatsapp_url =
            expand::expand_env(&self.contact.whatsapp_url, "contact.whatsapp_url")?;
        Ok(())
    }
}
