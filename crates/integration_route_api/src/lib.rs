//! Route persistence backend integration for Njira
//!
//! Talks to the REST backend that stores computed routes per user:
//! account registration, token login, and saving a route.
//!
//! [`RouteApiClient`] defines the interface, implemented over HTTP by
//! [`HttpRouteApiClient`].

mod client;
mod config;
mod error;
mod models;

pub use client::{HttpRouteApiClient, RouteApiClient};
pub use config::RouteApiConfig;
pub use error::RouteApiError;
pub use models::{AuthToken, Credentials, SavedRoute};
