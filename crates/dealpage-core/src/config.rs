use crate::app_config::{AppConfig, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The core parsing logic is decoupled from the actual environment so it can
/// be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
/// Every key has a default; nothing is required.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    Ok(AppConfig {
        request_timeout_secs: parse_u64("DEALPAGE_TIMEOUT_SECS", "30")?,
        user_agent: or_default("DEALPAGE_USER_AGENT", DEFAULT_USER_AGENT),
        summary_sentences: parse_usize("DEALPAGE_SUMMARY_SENTENCES", "3")?,
        summary_fallback_chars: parse_usize("DEALPAGE_SUMMARY_FALLBACK_CHARS", "300")?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_all_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.summary_sentences, 3);
        assert_eq!(config.summary_fallback_chars, 300);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn build_app_config_overrides_timeout() {
        let mut map = HashMap::new();
        map.insert("DEALPAGE_TIMEOUT_SECS", "5");
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn build_app_config_overrides_user_agent() {
        let mut map = HashMap::new();
        map.insert("DEALPAGE_USER_AGENT", "dealpage-test/0.1");
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.user_agent, "dealpage-test/0.1");
    }

    #[test]
    fn build_app_config_rejects_non_numeric_timeout() {
        let mut map = HashMap::new();
        map.insert("DEALPAGE_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DEALPAGE_TIMEOUT_SECS"),
            "expected InvalidEnvVar, got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_non_numeric_sentence_count() {
        let mut map = HashMap::new();
        map.insert("DEALPAGE_SUMMARY_SENTENCES", "three");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DEALPAGE_SUMMARY_SENTENCES"
        ));
    }
}
