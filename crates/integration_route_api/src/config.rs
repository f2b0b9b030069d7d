//! Backend client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the route persistence backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:8000`
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Keyword placed before the token in the `Authorization` header
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,
}

const fn default_timeout_secs() -> u64 {
    15
}

fn default_auth_scheme() -> String {
    "Token".to_string()
}

impl RouteApiConfig {
    /// Create a configuration for the given backend
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
            auth_scheme: default_auth_scheme(),
        }
    }

    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            timeout_secs: 5,
            ..Self::new(base_url)
        }
    }

    /// Absolute URL for an API path such as `/api/routes/`
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            ));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.auth_scheme.trim().is_empty() {
            return Err("auth_scheme must not be empty".to_string());
        }

        Ok(())
    }
}
