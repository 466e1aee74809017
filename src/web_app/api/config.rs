// web_app/api/config.rs - Scraper backend settings

use std::env;
use std::time::Duration;

/// Where the scraper listens when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/search";

pub const ENDPOINT_VAR: &str = "SCRAPER_BACKEND_URL";
pub const TIMEOUT_VAR: &str = "SCRAPER_BACKEND_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Full URL of the scraper's search endpoint
    pub endpoint: String,
    /// Request timeout. Scrapes can take minutes, so none by default.
    pub timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl BackendConfig {
    /// Read overrides from the environment (after `.env` has been loaded).
    ///
    /// A timeout that is not a positive integer is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = env::var(ENDPOINT_VAR) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint.trim().to_string();
            }
        }

        if let Ok(raw) = env::var(TIMEOUT_VAR) {
            match parse_timeout(&raw) {
                Some(timeout) => config.timeout = Some(timeout),
                None => tracing::warn!("Ignoring invalid {}={:?}", TIMEOUT_VAR, raw),
            }
        }

        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}
