use std::time::Duration;

/// Fallback base URL when `QUOTEDECK_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable carrying the backend base URL.
pub const BASE_URL_ENV: &str = "QUOTEDECK_API_URL";

/// Fixed request timeout for every gateway call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gateway configuration: one tunable (the base URL), everything else fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Resolve the base URL from the environment, falling back to localhost.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}
