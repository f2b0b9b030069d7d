//! Directions port
//!
//! Requests a route between two coordinates from a routing service.

use async_trait::async_trait;
use domain::{Coordinate, RouteRequest};
#[cfg(test)]
use mockall::automock;

use crate::error::RoutingFailure;

/// A route in the routing service's own units
#[derive(Debug, Clone, PartialEq)]
pub struct RawDirections {
    /// Points in traversal order
    pub coordinates: Vec<Coordinate>,
    /// Meters
    pub distance_m: f64,
    /// Seconds
    pub duration_s: f64,
}

/// Port for route retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Recommended route for `request`
    async fn directions(&self, request: &RouteRequest) -> Result<RawDirections, RoutingFailure>;
}
