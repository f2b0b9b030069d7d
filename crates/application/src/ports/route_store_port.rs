//! Route store port
//!
//! Account management and route persistence on a remote backend.

use std::fmt;

use async_trait::async_trait;
use domain::{RouteResult, TravelMode};
#[cfg(test)]
use mockall::automock;

use crate::error::BackendFailure;

/// Username and password for the backend
#[derive(Clone, PartialEq, Eq)]
pub struct AccountCredentials {
    /// Account name
    pub username: String,
    /// Account password
    pub password: String,
}

impl AccountCredentials {
    /// Create credentials
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Opaque token identifying a logged-in user
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// A computed route ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSubmission {
    /// Origin as typed by the user
    pub origin: String,
    /// Destination as typed by the user
    pub destination: String,
    /// Travel mode
    pub mode: TravelMode,
    /// The route itself
    pub route: RouteResult,
}

/// Port for the route backend
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RouteStorePort: Send + Sync {
    /// Create an account
    async fn register(&self, credentials: &AccountCredentials) -> Result<(), BackendFailure>;

    /// Exchange credentials for a session token
    async fn login(&self, credentials: &AccountCredentials)
    -> Result<SessionToken, BackendFailure>;

    /// Store a route for the token's owner
    async fn save_route(
        &self,
        token: &SessionToken,
        submission: &RouteSubmission,
    ) -> Result<(), BackendFailure>;
}
