//! `travthru serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use travthru_config::{CliSettings, Config, FirestoreConfig};
use travthru_firestore::FirestoreClient;
use travthru_server::{ServerConfig, run_server};
use travthru_site::{ArticleSite, SiteSettings};
use travthru_store::ArticleStore;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover travthru.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Firestore project ID (overrides config).
    #[arg(long, env = "FIREBASE_PROJECT_ID")]
    project_id: Option<String>,

    /// Enable verbose output (request and lookup logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            project_id: self.project_id,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let firestore = config.require_firestore()?;

        output.startup_summary(&config);

        let store: Arc<dyn ArticleStore> = Arc::new(firestore_client(firestore));
        let site = Arc::new(ArticleSite::new(store, site_settings(&config)));

        run_server(ServerConfig::from(&config), site).await?;

        Ok(())
    }
}

/// Build the Firestore client from its config section.
fn firestore_client(config: &FirestoreConfig) -> FirestoreClient {
    FirestoreClient::new(&config.project_id)
        .with_api_key(&config.api_key)
        .with_database(&config.database)
        .with_collection(&config.collection)
        .with_base_url(&config.base_url)
        .with_timeout(config.timeout())
}

/// Page settings from the `[articles]` and `[contact]` sections.
fn site_settings(config: &Config) -> SiteSettings {
    SiteSettings {
        site_name: config.articles.site_name.clone(),
        related_limit: config.articles.related_limit,
        whatsapp_url: config.contact.whatsapp_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_site_settings_from_config() {
        let mut config = Config::default();
        config.articles.related_limit = 4;
        config.articles.site_name = "TRAVTHRU MY".to_owned();

        let settings = site_settings(&config);

        assert_eq!(settings.related_limit, 4);
        assert_eq!(settings.site_name, "TRAVTHRU MY");
        assert_eq!(settings.whatsapp_url, "https://wa.me/60107198186");
    }

    #[test]
    fn test_default_config_matches_site_defaults() {
        let settings = site_settings(&Config::default());
        let defaults = SiteSettings::default();

        assert_eq!(settings.site_name, defaults.site_name);
        assert_eq!(settings.related_limit, defaults.related_limit);
        assert_eq!(settings.whatsapp_url, defaults.whatsapp_url);
    }

    #[test]
    fn test_firestore_client_uses_collection() {
        let config = FirestoreConfig {
            project_id: "travthru-prod".to_owned(),
            collection: "articles-staging".to_owned(),
            ..FirestoreConfig::default()
        };

        assert_eq!(firestore_client(&config).collection(), "articles-staging");
    }
}
