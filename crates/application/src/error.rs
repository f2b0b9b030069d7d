//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A location could not be resolved
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The route backend failed
    #[error(transparent)]
    Backend(#[from] BackendFailure),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why a location could not be turned into a coordinate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// Nothing but whitespace was entered
    #[error("Location must not be empty")]
    EmptyInput,

    /// A numeric pair was entered but does not describe a valid position
    #[error("Invalid coordinates '{input}': {reason}")]
    InvalidCoordinates {
        /// Text as entered
        input: String,
        /// What is wrong with it
        reason: String,
    },

    /// The geocoder returned no match, or could not be reached
    #[error("Location not found: {0}")]
    NotFound(String),
}

/// Why a directions request produced no route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingFailure {
    /// The routing service answered with a non-success status
    #[error("Routing service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the service
        body: String,
    },

    /// The routing service could not be reached
    #[error("Routing service unreachable: {0}")]
    Transport(String),

    /// The response did not match the expected schema
    #[error("Unexpected routing response: {0}")]
    Decode(String),

    /// The service answered successfully but found no route
    #[error("No route found")]
    NoRoute,
}

/// Failures talking to the route backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendFailure {
    /// No backend is configured
    #[error("No route backend configured")]
    NotConfigured,

    /// The backend is configured but no account to use
    #[error("Backend credentials missing: {0}")]
    MissingCredentials(String),

    /// The backend refused the request
    #[error("Backend rejected request (HTTP {status}): {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// The backend could not be reached
    #[error("Backend unreachable: {0}")]
    Unavailable(String),

    /// The backend response could not be understood
    #[error("Unexpected backend response: {0}")]
    Protocol(String),
}

impl BackendFailure {
    /// Whether the backend refused the session token or credentials
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 401 | 403, .. })
    }
}
