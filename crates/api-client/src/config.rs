//! Backend configuration.
//!
//! Values come from `MOVIA_`-prefixed environment variables (a `.env` file
//! is loaded first when present):
//!
//! | variable                   | default |
//! |----------------------------|---------|
//! | `MOVIA_BACKEND_IP`         | unset   |
//! | `MOVIA_BACKEND_PROTOCOL`   | `https` |
//! | `MOVIA_REQUEST_TIMEOUT_MS` | `12000` |
//!
//! Without a backend address requests are built relative to the current
//! origin.

use crate::error::{ApiError, Result};
use serde::Deserialize;
use std::time::Duration;

pub const ENV_PREFIX: &str = "MOVIA_";
pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_TIMEOUT_MS: u64 = 12_000;

/// Backend configuration loaded from the environment
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Host, host:port or full URL of the backend
    #[serde(default)]
    pub backend_ip: Option<String>,

    /// Scheme used when `backend_ip` has none
    #[serde(default = "default_protocol")]
    pub backend_protocol: String,

    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_protocol() -> String {
    DEFAULT_PROTOCOL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_ip: None,
            backend_protocol: default_protocol(),
            request_timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit `(name, value)` pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| ApiError::Config(format!("failed to load config: {e}")))
    }

    /// Override the backend address
    pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
        self.backend_ip = Some(backend.into());
        self
    }

    /// Override the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    /// Normalized base URL, or `None` for same-origin mode
    pub fn base_url(&self) -> Result<Option<String>> {
        match self.backend_ip.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                normalize_backend_base_url(raw, &self.backend_protocol).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Turn a raw backend address into a base URL.
///
/// Trailing slashes are stripped. Addresses that already carry an `http://`
/// or `https://` scheme (any case) are kept, others get `protocol` prepended.
pub fn normalize_backend_base_url(raw: &str, protocol: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ApiError::Config("backend address is empty".to_string()));
    }

    if has_http_scheme(trimmed) {
        return Ok(trimmed.to_string());
    }

    let protocol = protocol.trim().replace("://", "");
    let protocol = if protocol.is_empty() {
        DEFAULT_PROTOCOL
    } else {
        protocol.as_str()
    };

    Ok(format!("{protocol}://{trimmed}"))
}

fn has_http_scheme(address: &str) -> bool {
    let lower = address.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_keeps_explicit_scheme() {
        assert_eq!(
            normalize_backend_base_url("  HTTP://10.0.0.5:8000/// ", "https").unwrap(),
            "HTTP://10.0.0.5:8000"
        );
        assert_eq!(
            normalize_backend_base_url("https://api.test.local/", "http").unwrap(),
            "https://api.test.local"
        );
    }

    #[test]
    fn test_normalize_prepends_protocol() {
        assert_eq!(
            normalize_backend_base_url("10.0.0.5:8000", "http://").unwrap(),
            "http://10.0.0.5:8000"
        );
        assert_eq!(
            normalize_backend_base_url("api.test.local/", " ").unwrap(),
            "https://api.test.local"
        );
    }

    #[test]
    fn test_normalize_rejects_blank() {
        let err = normalize_backend_base_url(" // ", "https").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ApiConfig::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();

        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.base_url().unwrap(), None);
        assert_eq!(config.timeout(), Duration::from_millis(12_000));
    }

    #[test]
    fn test_prefixed_env_vars() {
        let config = ApiConfig::from_vars(vars(&[
            ("MOVIA_BACKEND_IP", "192.168.1.20:8000"),
            ("MOVIA_BACKEND_PROTOCOL", "http"),
            ("MOVIA_REQUEST_TIMEOUT_MS", "500"),
        ]))
        .unwrap();

        assert_eq!(
            config.base_url().unwrap().as_deref(),
            Some("http://192.168.1.20:8000")
        );
        assert_eq!(config.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_blank_backend_means_same_origin() {
        let config = ApiConfig::default().with_backend("   ");
        assert_eq!(config.base_url().unwrap(), None);
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let err = ApiConfig::from_vars(vars(&[("MOVIA_REQUEST_TIMEOUT_MS", "soon")])).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
