//! HTTP server for TRAVTHRU article pages.
//!
//! Serves the rendered article pages, a JSON view of the same data, and the
//! browser script that drives the copy and share buttons:
//!
//! ```text
//! GET /articles/{slug}      HTML page (404 when not found)
//! GET /api/articles/{slug}  JSON article view (404 when not found)
//! GET /static/article.js    copy/share script
//! GET /health               liveness probe
//! ```
//!
//! Store lookups are blocking and run on the tokio blocking pool; each
//! request resolves its own page.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

pub use error::ServerError;
use state::AppState;
use travthru_site::ArticleSite;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
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

impl From<&travthru_config::Config> for ServerConfig {
    fn from(config: &travthru_config::Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot be
/// bound.
pub async fn run_server(config: ServerConfig, site: Arc<ArticleSite>) -> Result<(), ServerError> {
    let state = Arc::new(AppState { site });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut config = travthru_config::Config::default();
        config.server.host = "0.0.0.0".to_owned();
        config.server.port = 8081;

        let server = ServerConfig::from(&config);

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8081);
    }

    #[test]
    fn test_default_matches_config_default() {
        let server = ServerConfig::from(&travthru_config::Config::default());
        let default = ServerConfig::default();

        assert_eq!(server.host, default.host);
        assert_eq!(server.port, default.port);
    }
}
