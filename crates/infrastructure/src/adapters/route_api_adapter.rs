//! Route backend adapter - Implements RouteStorePort using integration_route_api

use application::error::BackendFailure;
use application::ports::{AccountCredentials, RouteStorePort, RouteSubmission, SessionToken};
use async_trait::async_trait;
use integration_route_api::{
    AuthToken, Credentials, HttpRouteApiClient, RouteApiClient, RouteApiConfig, RouteApiError,
    SavedRoute,
};
use tracing::instrument;

/// Adapter for the route persistence backend
pub struct RouteApiAdapter {
    client: Box<dyn RouteApiClient>,
}

impl std::fmt::Debug for RouteApiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteApiAdapter")
            .field("client", &"RouteApiClient")
            .finish()
    }
}

impl RouteApiAdapter {
    /// Create an adapter with an HTTP client for `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &RouteApiConfig) -> Result<Self, BackendFailure> {
        let client = HttpRouteApiClient::new(config).map_err(Self::backend_failure)?;
        Ok(Self::from_client(Box::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn from_client(client: Box<dyn RouteApiClient>) -> Self {
        Self { client }
    }

    fn credentials(credentials: &AccountCredentials) -> Credentials {
        Credentials::new(&credentials.username, &credentials.password)
    }

    fn backend_failure(error: RouteApiError) -> BackendFailure {
        match error {
            RouteApiError::Rejected { status, body } => BackendFailure::Rejected { status, body },
            e @ (RouteApiError::ConnectionFailed(_) | RouteApiError::Timeout { .. }) => {
                BackendFailure::Unavailable(e.to_string())
            },
            RouteApiError::ParseError(msg) | RouteApiError::ConfigurationError(msg) => {
                BackendFailure::Protocol(msg)
            },
        }
    }
}

#[async_trait]
impl RouteStorePort for RouteApiAdapter {
    #[instrument(skip(self))]
    async fn register(&self, credentials: &AccountCredentials) -> Result<(), BackendFailure> {
        self.client
            .register(&Self::credentials(credentials))
            .await
            .map_err(Self::backend_failure)
    }

    #[instrument(skip(self))]
    async fn login(
        &self,
        credentials: &AccountCredentials,
    ) -> Result<SessionToken, BackendFailure> {
        let token = self
            .client
            .login(&Self::credentials(credentials))
            .await
            .map_err(Self::backend_failure)?;
        Ok(SessionToken::new(token.as_str()))
    }

    #[instrument(skip(self, token))]
    async fn save_route(
        &self,
        token: &SessionToken,
        submission: &RouteSubmission,
    ) -> Result<(), BackendFailure> {
        let payload = SavedRoute::from_route(
            submission.origin.as_str(),
            submission.destination.as_str(),
            submission.mode,
            &submission.route,
        );
        self.client
            .save_route(&AuthToken::new(token.expose()), &payload)
            .await
            .map_err(Self::backend_failure)
    }
}
