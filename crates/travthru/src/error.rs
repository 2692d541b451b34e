//! CLI error types.

use travthru_config::ConfigError;
use travthru_server::ServerError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}
