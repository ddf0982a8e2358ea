//! Startup configuration, read from the environment once.

use anyhow::bail;
use todolist_core::DEFAULT_BASE_URL;

/// Environment variable overriding the todos endpoint.
pub const API_URL_VAR: &str = "TODOLIST_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub api_url: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset or blank values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = match lookup(API_URL_VAR) {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => DEFAULT_BASE_URL.to_string(),
        };
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            bail!("{API_URL_VAR} must be an http(s) URL, got {api_url:?}");
        }
        Ok(Self { api_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_uses_default_endpoint() {
        let config = ViewerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.api_url, "http://localhost:8080/api/v1/todos");
    }

    #[test]
    fn blank_uses_default_endpoint() {
        let config = ViewerConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn override_is_trimmed() {
        let config =
            ViewerConfig::from_lookup(|_| Some(" https://todos.example/api/v1/todos ".to_string()))
                .unwrap();
        assert_eq!(config.api_url, "https://todos.example/api/v1/todos");
    }

    #[test]
    fn non_http_url_is_rejected() {
        let err = ViewerConfig::from_lookup(|_| Some("ftp://example".to_string())).unwrap_err();
        assert!(err.to_string().contains(API_URL_VAR));
    }
}
