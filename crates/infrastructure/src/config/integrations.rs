//! External service configurations: OpenRouteService and the route backend

use integration_ors::OrsConfig;
use integration_route_api::RouteApiConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// OpenRouteService Configuration
// ==============================

/// OpenRouteService configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrsAppConfig {
    /// Base URL of the ORS API
    #[serde(default = "default_ors_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 15)
    #[serde(default = "default_ors_timeout")]
    pub timeout_secs: u64,
}

fn default_ors_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

const fn default_ors_timeout() -> u64 {
    15
}

impl Default for OrsAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_ors_base_url(),
            api_key: None,
            timeout_secs: default_ors_timeout(),
        }
    }
}

impl OrsAppConfig {
    /// Whether a non-blank API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Convert to `integration_ors`'s `OrsConfig`
    #[must_use]
    pub fn to_ors_config(&self) -> OrsConfig {
        OrsConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().trim().to_string())
                .unwrap_or_default(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or another field is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_api_key() {
            return Err(
                "ors.api_key is required (set NJIRA_ORS__API_KEY or ORS_API_KEY)".to_string(),
            );
        }
        self.to_ors_config()
            .validate()
            .map_err(|e| format!("ors: {e}"))
    }
}

// ==============================
// Route Backend Configuration
// ==============================

/// Route backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendAppConfig {
    /// Base URL of the backend, e.g. `http://localhost:8000`
    pub base_url: String,

    /// Request timeout in seconds (default: 15)
    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,

    /// `Authorization` header keyword (default: `Token`)
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,

    /// Account used by `--save` (optional)
    #[serde(default)]
    pub username: Option<String>,

    /// Password for `username` (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub password: Option<SecretString>,
}

const fn default_backend_timeout() -> u64 {
    15
}

fn default_auth_scheme() -> String {
    "Token".to_string()
}

impl Default for BackendAppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: default_backend_timeout(),
            auth_scheme: default_auth_scheme(),
            username: None,
            password: None,
        }
    }
}

impl BackendAppConfig {
    /// Convert to `integration_route_api`'s `RouteApiConfig`
    #[must_use]
    pub fn to_route_api_config(&self) -> RouteApiConfig {
        RouteApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            auth_scheme: self.auth_scheme.clone(),
        }
    }

    /// Get the password as a string reference
    #[must_use]
    pub fn password_str(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret())
    }
}
