//! Geocoding port
//!
//! Turns a free-text place name into a coordinate.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Coordinate of the best match for `text`
    ///
    /// Returns `Ok(None)` when the service answered but found nothing.
    async fn geocode(&self, text: &str) -> Result<Option<Coordinate>, ApplicationError>;
}
