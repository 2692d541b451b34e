//! Colored terminal output utilities.

use console::{Style, Term};
use travthru_config::Config;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print the resolved settings before the server starts.
    pub(crate) fn startup_summary(&self, config: &Config) {
        self.highlight(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        for line in summary_lines(config) {
            self.info(&line);
        }
        if config.firestore.api_key.is_empty() {
            self.warning("Firestore API key: not set (unauthenticated requests)");
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self
            .term
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }
}

fn summary_lines(config: &Config) -> Vec<String> {
    let firestore = &config.firestore;
    vec![
        format!(
            "Firestore: {}/{} ({})",
            firestore.project_id, firestore.collection, firestore.database
        ),
        format!("Related articles: {}", config.articles.related_limit),
        format!("Booking link: {}", config.contact.whatsapp_url),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_summary_lines() {
        let mut config = Config::default();
        config.firestore.project_id = "travthru-prod".to_owned();

        assert_eq!(
            summary_lines(&config),
            vec![
                "Firestore: travthru-prod/car-rental-articles ((default))".to_owned(),
                "Related articles: 2".to_owned(),
                "Booking link: https://wa.me/60107198186".to_owned(),
            ]
        );
    }
}
