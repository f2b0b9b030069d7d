//! Route sync service
//!
//! Registration, login and route upload against the optional backend.

use std::{fmt, sync::Arc};

use tracing::{debug, instrument};

use super::PlannedRoute;
use crate::{
    error::BackendFailure,
    ports::{AccountCredentials, RouteStorePort, RouteSubmission, SessionToken},
};

/// Talks to the route backend
#[derive(Clone)]
pub struct RouteSyncService {
    store: Option<Arc<dyn RouteStorePort>>,
}

impl fmt::Debug for RouteSyncService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteSyncService")
            .field("configured", &self.store.is_some())
            .finish()
    }
}

impl RouteSyncService {
    /// Create a service backed by `store`
    #[must_use]
    pub fn new(store: Arc<dyn RouteStorePort>) -> Self {
        Self { store: Some(store) }
    }

    /// Create a service with no backend; every call fails with `NotConfigured`
    #[must_use]
    pub const fn disabled() -> Self {
        Self { store: None }
    }

    /// Whether a backend is available
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> Result<&Arc<dyn RouteStorePort>, BackendFailure> {
        self.store.as_ref().ok_or(BackendFailure::NotConfigured)
    }

    /// Create an account
    #[instrument(skip(self))]
    pub async fn register(&self, credentials: &AccountCredentials) -> Result<(), BackendFailure> {
        self.store()?.register(credentials).await
    }

    /// Log in and return the session token
    #[instrument(skip(self))]
    pub async fn login(
        &self,
        credentials: &AccountCredentials,
    ) -> Result<SessionToken, BackendFailure> {
        self.store()?.login(credentials).await
    }

    /// Upload a planned route
    ///
    /// Routes without geometry are not sent.
    #[instrument(skip(self, token, planned), fields(origin = %planned.origin_text, destination = %planned.destination_text))]
    pub async fn save(
        &self,
        token: &SessionToken,
        planned: &PlannedRoute,
    ) -> Result<bool, BackendFailure> {
        let store = self.store()?;
        if planned.outcome.route.is_empty() {
            debug!("Skipping upload of empty route");
            return Ok(false);
        }

        let submission = RouteSubmission {
            origin: planned.origin_text.clone(),
            destination: planned.destination_text.clone(),
            mode: planned.mode,
            route: planned.outcome.route.clone(),
        };
        store.save_route(token, &submission).await?;
        Ok(true)
    }
}
