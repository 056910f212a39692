//! Environment driven settings for the remote Weave API.

use std::sync::LazyLock;
use std::time::Duration;

pub const WEAVE_API_URL_ENV: &str = "WEAVE_API_URL";
pub const WEAVE_API_TIMEOUT_SECS_ENV: &str = "WEAVE_API_TIMEOUT_SECS";
pub const WEAVE_TAG_VOCABULARY_ENV: &str = "WEAVE_TAG_VOCABULARY";

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct WeaveApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl WeaveApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(WEAVE_API_URL_ENV).unwrap_or(DEFAULT_API_URL.to_string());
        let timeout_secs = match lookup(WEAVE_API_TIMEOUT_SECS_ENV) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!("ignoring invalid {WEAVE_API_TIMEOUT_SECS_ENV}={raw:?}");
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

static API_CONFIG: LazyLock<WeaveApiConfig> = LazyLock::new(WeaveApiConfig::from_env);

/// Weave API settings, read from the environment on first use.
pub fn api_config() -> &'static WeaveApiConfig {
    &API_CONFIG
}

pub fn tag_vocabulary_path() -> Option<String> {
    std::env::var(WEAVE_TAG_VOCABULARY_ENV).ok().filter(|p| !p.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> WeaveApiConfig {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        WeaveApiConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_without_env() {
        let config = config_from(&[]);
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slash_is_trimmed_and_paths_joined() {
        let config = config_from(&[(WEAVE_API_URL_ENV, "https://weave.example.org/"), (WEAVE_API_TIMEOUT_SECS_ENV, "5")]);
        assert_eq!(config.url_for("/api/profiles"), "https://weave.example.org/api/profiles");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn api_config_is_read_once() {
        assert!(std::ptr::eq(api_config(), api_config()));
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        let config = config_from(&[(WEAVE_API_TIMEOUT_SECS_ENV, "soon")]);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
