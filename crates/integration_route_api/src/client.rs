//! HTTP client for the route backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, instrument};

use crate::config::RouteApiConfig;
use crate::error::RouteApiError;
use crate::models::{AuthToken, Credentials, SavedRoute, TokenResponse};

const REGISTER_PATH: &str = "/api/auth/register/";
const LOGIN_PATH: &str = "/api/auth/token/login/";
const ROUTES_PATH: &str = "/api/routes/";

/// Trait for route backend clients
#[async_trait]
pub trait RouteApiClient: Send + Sync {
    /// Create an account
    async fn register(&self, credentials: &Credentials) -> Result<(), RouteApiError>;

    /// Exchange credentials for an auth token
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, RouteApiError>;

    /// Store a computed route for the token's owner
    async fn save_route(&self, token: &AuthToken, route: &SavedRoute)
    -> Result<(), RouteApiError>;
}

/// Route backend client over HTTP
#[derive(Debug)]
pub struct HttpRouteApiClient {
    client: Client,
    config: RouteApiConfig,
}

impl HttpRouteApiClient {
    /// Create a new backend client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RouteApiConfig) -> Result<Self, RouteApiError> {
        config
            .validate()
            .map_err(RouteApiError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("Njira/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RouteApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn transport_error(&self, error: &reqwest::Error) -> RouteApiError {
        RouteApiError::from_reqwest(error, self.config.timeout_secs)
    }

    /// Pass `response` through if it has the `expected` status
    async fn expect_status(
        response: Response,
        expected: StatusCode,
    ) -> Result<Response, RouteApiError> {
        let status = response.status();
        if status == expected {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), %body, "Backend rejected request");
        Err(RouteApiError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RouteApiClient for HttpRouteApiClient {
    #[instrument(skip(self), fields(username = %credentials.username))]
    async fn register(&self, credentials: &Credentials) -> Result<(), RouteApiError> {
        let response = self
            .client
            .post(self.config.endpoint(REGISTER_PATH))
            .json(credentials)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        Self::expect_status(response, StatusCode::CREATED).await?;
        debug!("Account registered");
        Ok(())
    }

    #[instrument(skip(self), fields(username = %credentials.username))]
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, RouteApiError> {
        let response = self
            .client
            .post(self.config.endpoint(LOGIN_PATH))
            .form(credentials)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let response = Self::expect_status(response, StatusCode::OK).await?;
        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| RouteApiError::ParseError(e.to_string()))?;

        debug!("Logged in");
        Ok(AuthToken::new(body.token))
    }

    #[instrument(skip(self, token), fields(origin = %route.origin_name, destination = %route.destination_name))]
    async fn save_route(
        &self,
        token: &AuthToken,
        route: &SavedRoute,
    ) -> Result<(), RouteApiError> {
        let response = self
            .client
            .post(self.config.endpoint(ROUTES_PATH))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("{} {}", self.config.auth_scheme, token.as_str()),
            )
            .json(route)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        Self::expect_status(response, StatusCode::CREATED).await?;
        debug!("Route saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RouteApiConfig::new("not a url");
        assert!(matches!(
            HttpRouteApiClient::new(&config),
            Err(RouteApiError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_new_with_valid_config() {
        assert!(HttpRouteApiClient::new(&RouteApiConfig::for_testing("http://localhost")).is_ok());
    }
}
