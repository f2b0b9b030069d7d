//! Service wiring for the CLI
//!
//! Builds the adapters and services from the loaded configuration and keeps
//! the backend session token between saves.

use std::sync::Arc;

use anyhow::Context;
use application::{
    AccountCredentials, BackendFailure, GeocodeCachePort, GeocodeCacheStats, LocationResolver,
    PlannedRoute, RoutePlanner, RouteRetriever, RouteSyncService, SessionToken,
};
use infrastructure::{AppConfig, BackendAppConfig, LruGeocodeCache, OrsAdapter, RouteApiAdapter};
use tracing::{debug, warn};

/// The wired-up application
pub struct App {
    planner: RoutePlanner,
    sync: RouteSyncService,
    cache: Arc<LruGeocodeCache>,
    backend: Option<BackendAppConfig>,
    token: Option<SessionToken>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("planner", &self.planner)
            .field("sync", &self.sync)
            .field("logged_in", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl App {
    /// Validate `config` and build every service from it
    ///
    /// A missing ORS API key is reported here, before any command runs.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        config.validate().context("Invalid configuration")?;

        let ors = Arc::new(OrsAdapter::new(&config.ors.to_ors_config())?);
        let cache = Arc::new(LruGeocodeCache::new(config.resolver.cache_capacity));
        let resolver = LocationResolver::new(ors.clone(), config.resolver.to_resolver_config())
            .with_cache(cache.clone());
        let retriever = RouteRetriever::new(ors, config.routing.duration_precision);
        let planner = RoutePlanner::new(Arc::new(resolver), Arc::new(retriever));

        let sync = match &config.backend {
            Some(backend) => {
                let adapter = RouteApiAdapter::new(&backend.to_route_api_config())
                    .context("Failed to create backend client")?;
                RouteSyncService::new(Arc::new(adapter))
            },
            None => RouteSyncService::disabled(),
        };

        debug!(
            cache_capacity = config.resolver.cache_capacity,
            backend = sync.is_configured(),
            "Application initialized"
        );

        Ok(Self {
            planner,
            sync,
            cache,
            backend: config.backend.clone(),
            token: None,
        })
    }

    pub const fn planner(&self) -> &RoutePlanner {
        &self.planner
    }

    pub const fn sync(&self) -> &RouteSyncService {
        &self.sync
    }

    pub fn cache_stats(&self) -> GeocodeCacheStats {
        self.cache.stats()
    }

    /// Credentials for `username`, taking the password from the argument or
    /// the backend configuration
    pub fn credentials_for(
        &self,
        username: &str,
        password: Option<String>,
    ) -> Result<AccountCredentials, BackendFailure> {
        let password = password
            .or_else(|| {
                self.backend
                    .as_ref()
                    .and_then(BackendAppConfig::password_str)
                    .map(str::to_string)
            })
            .ok_or_else(|| {
                BackendFailure::MissingCredentials(
                    "pass --password or set NJIRA_PASSWORD".to_string(),
                )
            })?;
        Ok(AccountCredentials::new(username, password))
    }

    /// The account configured for uploads
    fn configured_account(&self) -> Result<AccountCredentials, BackendFailure> {
        let backend = self
            .backend
            .as_ref()
            .ok_or(BackendFailure::NotConfigured)?;
        match (backend.username.as_deref(), backend.password_str()) {
            (Some(username), Some(password)) => Ok(AccountCredentials::new(username, password)),
            _ => Err(BackendFailure::MissingCredentials(
                "set backend.username and backend.password".to_string(),
            )),
        }
    }

    /// Upload `planned`, logging in with the configured account first if needed
    ///
    /// The token is reused for later saves and dropped when the backend
    /// rejects it.
    pub async fn save(&mut self, planned: &PlannedRoute) -> Result<bool, BackendFailure> {
        if planned.outcome.route.is_empty() {
            return Ok(false);
        }

        let token = match self.token.take() {
            Some(token) => token,
            None => {
                let account = self.configured_account()?;
                self.sync.login(&account).await?
            },
        };

        let result = self.sync.save(&token, planned).await;
        if !matches!(&result, Err(failure) if failure.is_unauthorized()) {
            self.token = Some(token);
        }
        result
    }
}

/// Message to show after a save attempt, if any
pub fn describe_save(result: &Result<bool, BackendFailure>) -> Option<String> {
    match result {
        Ok(true) => Some("✅ Route saved".to_string()),
        Ok(false) => None,
        Err(e) => {
            warn!(error = %e, "Could not save route");
            Some(format!("⚠️  Route not saved: {e}"))
        },
    }
}
