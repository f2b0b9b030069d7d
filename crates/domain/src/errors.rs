//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the WGS-84 range
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Empty or otherwise unusable location text
    #[error("Invalid location query: {0}")]
    InvalidLocationQuery(String),

    /// Unknown travel mode name
    #[error("Invalid travel mode: {0}")]
    InvalidTravelMode(String),

    /// Unparseable or out-of-range coordinate reference system
    #[error("Invalid coordinate system: {0}")]
    InvalidCoordinateSystem(String),

    /// Unknown axis order name
    #[error("Invalid axis order: {0}")]
    InvalidAxisOrder(String),

    /// Export to an interchange format failed
    #[error("Export failed: {0}")]
    Export(String),
}

impl DomainError {
    /// Create an invalid coordinates error
    pub const fn invalid_coordinates(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinates {
            latitude,
            longitude,
        }
    }
}
