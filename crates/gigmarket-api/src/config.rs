//! Client configuration loaded from environment variables.
//!
//! Read once at startup and injected everywhere else.  All settings have
//! defaults so the client can run with zero configuration against a local
//! backend.

use std::time::Duration;

use gigmarket_shared::constants::{DEFAULT_API_BASE, DEFAULT_POLL_INTERVAL_MS};

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend root, without a trailing slash.
    /// Env: `GIGMARKET_API_BASE`
    /// Default: `http://localhost:5000`
    pub api_base: String,

    /// Chat refresh period.
    /// Env: `GIGMARKET_POLL_INTERVAL_MS`
    /// Default: `3000`
    pub poll_interval: Duration,

    /// Per-request timeout.  `None` lets requests run to completion.
    /// Env: `GIGMARKET_REQUEST_TIMEOUT_SECS`
    /// Default: none
    pub request_timeout: Option<Duration>,

    /// Bearer token for the moderation endpoints.
    /// Env: `GIGMARKET_ADMIN_TOKEN`
    /// Default: none (moderation unavailable).
    pub admin_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            request_timeout: None,
            admin_token: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup("GIGMARKET_API_BASE") {
            match normalize_base(&base) {
                Some(base) => config.api_base = base,
                None => tracing::warn!(value = %base, "Invalid GIGMARKET_API_BASE, using default"),
            }
        }

        if let Some(val) = lookup("GIGMARKET_POLL_INTERVAL_MS") {
            match val.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.poll_interval = Duration::from_millis(ms),
                _ => tracing::warn!(
                    value = %val,
                    "Invalid GIGMARKET_POLL_INTERVAL_MS, using default"
                ),
            }
        }

        if let Some(val) = lookup("GIGMARKET_REQUEST_TIMEOUT_SECS") {
            match val.trim().parse::<u64>() {
                Ok(0) => config.request_timeout = None,
                Ok(secs) => config.request_timeout = Some(Duration::from_secs(secs)),
                Err(_) => tracing::warn!(
                    value = %val,
                    "Invalid GIGMARKET_REQUEST_TIMEOUT_SECS, requests will not time out"
                ),
            }
        }

        if let Some(token) = lookup("GIGMARKET_ADMIN_TOKEN") {
            if !token.trim().is_empty() {
                config.admin_token = Some(token.trim().to_string());
            }
        }

        config
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        if let Some(base) = normalize_base(base) {
            self.api_base = base;
        }
        self
    }
}

/// Trim whitespace and trailing slashes; only http(s) roots are accepted.
fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.poll_interval, Duration::from_secs(3));
        assert!(config.request_timeout.is_none());
        assert!(config.admin_token.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("GIGMARKET_API_BASE", "https://api.example.com/"),
            ("GIGMARKET_POLL_INTERVAL_MS", "1500"),
            ("GIGMARKET_REQUEST_TIMEOUT_SECS", "20"),
            ("GIGMARKET_ADMIN_TOKEN", " secret "),
        ]));
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.poll_interval, Duration::from_millis(1500));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(20)));
        assert_eq!(config.admin_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("GIGMARKET_API_BASE", "localhost:5000"),
            ("GIGMARKET_POLL_INTERVAL_MS", "0"),
            ("GIGMARKET_ADMIN_TOKEN", "   "),
        ]));
        assert_eq!(config, ClientConfig::default());
    }
}
