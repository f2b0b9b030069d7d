//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: OpenRouteService and the route backend
//! - `routing`: location resolution and route statistics

mod integrations;
mod routing;

use std::path::Path;

use application::ApplicationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use integrations::{BackendAppConfig, OrsAppConfig};
pub use routing::{ResolverAppConfig, RoutingAppConfig};

use crate::telemetry::LoggingConfig;

/// Prefix of environment overrides, e.g. `NJIRA_ORS__TIMEOUT_SECS`
pub const ENV_PREFIX: &str = "NJIRA";

/// Variable consulted for the ORS key when no other source sets one
pub const ORS_API_KEY_VAR: &str = "ORS_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenRouteService connection
    #[serde(default)]
    pub ors: OrsAppConfig,

    /// Location resolution
    #[serde(default)]
    pub resolver: ResolverAppConfig,

    /// Route statistics
    #[serde(default)]
    pub routing: RoutingAppConfig,

    /// Route backend (optional)
    #[serde(default)]
    pub backend: Option<BackendAppConfig>,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `njira.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of `njira.toml` when given
    ///
    /// Precedence, lowest first: built-in defaults, `ORS_API_KEY`, the file,
    /// `NJIRA_*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist, a source cannot be read, or
    /// a value has the wrong type.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with(path, std::env::var(ORS_API_KEY_VAR).ok(), environment())
    }

    fn load_with(
        path: Option<&Path>,
        ors_api_key: Option<String>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            // Start with defaults
            .set_default("ors.base_url", "https://api.openrouteservice.org")?
            .set_default("ors.timeout_secs", 15)?
            .set_default("resolver.axis_order", "lonlat")?
            .set_default("resolver.crs", "wgs84")?;

        if let Some(key) = ors_api_key {
            builder = builder.set_default("ors.api_key", key)?;
        }

        builder = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                builder.add_source(config::File::from(path).required(true))
            },
            None => builder.add_source(config::File::with_name("njira").required(false)),
        };

        // Override with environment variables (e.g., NJIRA_ORS__API_KEY)
        let config = builder.add_source(environment).build()?;
        config.try_deserialize()
    }

    /// Check that the configuration can be used
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first problem,
    /// most importantly a missing ORS API key.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.ors.validate().map_err(ApplicationError::Configuration)?;
        if let Some(backend) = &self.backend {
            backend
                .to_route_api_config()
                .validate()
                .map_err(|e| ApplicationError::Configuration(format!("backend: {e}")))?;
        }
        Ok(())
    }
}

/// `NJIRA_*` variables, `__` separating nested keys
///
/// Values stay strings; numeric and boolean fields are converted on
/// deserialization so digit-only secrets keep their leading zeros.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
