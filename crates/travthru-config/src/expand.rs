//! `${VAR}` expansion for secrets and deployment-specific values.

use crate::ConfigError;

/// Unset variable reported by the lookup closure.
struct MissingVar(String);

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Bare `$VAR` is left alone so URLs containing `$` survive. An unset
/// variable without a default is an error naming both the variable and the
/// config `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| {
        std::env::var(name)
            .map(Some)
            .map_err(|_| MissingVar(name.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_set_var_expanded() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("TRAVTHRU_EXPAND_PROJECT", "travthru-prod");
        }
        assert_eq!(
            expand_env("${TRAVTHRU_EXPAND_PROJECT}", "firestore.project_id").unwrap(),
            "travthru-prod"
        );
        unsafe {
            std::env::remove_var("TRAVTHRU_EXPAND_PROJECT");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("TRAVTHRU_EXPAND_UNSET_KEY");
        }
        assert_eq!(
            expand_env("${TRAVTHRU_EXPAND_UNSET_KEY:-}", "firestore.api_key").unwrap(),
            ""
        );
        assert_eq!(
            expand_env("${TRAVTHRU_EXPAND_UNSET_KEY:-0.0.0.0}", "server.host").unwrap(),
            "0.0.0.0"
        );
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("TRAVTHRU_EXPAND_MISSING");
        }
        let err = expand_env("${TRAVTHRU_EXPAND_MISSING}", "firestore.api_key").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in firestore.api_key: ${TRAVTHRU_EXPAND_MISSING} not set"
        );
    }

    #[test]
    fn test_embedded_reference() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("TRAVTHRU_EXPAND_PHONE", "60107198186");
        }
        assert_eq!(
            expand_env("https://wa.me/${TRAVTHRU_EXPAND_PHONE}", "contact.whatsapp_url").unwrap(),
            "https://wa.me/60107198186"
        );
        unsafe {
            std::env::remove_var("TRAVTHRU_EXPAND_PHONE");
        }
    }

    #[test]
    fn test_plain_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
        assert_eq!(
            expand_env("https://wa.me/$PHONE", "contact.whatsapp_url").unwrap(),
            "https://wa.me/$PHONE"
        );
    }
}
