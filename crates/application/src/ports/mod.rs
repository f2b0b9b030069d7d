//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod directions_port;
mod geocode_cache_port;
mod geocoding_port;
mod route_store_port;

#[cfg(test)]
pub use directions_port::MockDirectionsPort;
pub use directions_port::{DirectionsPort, RawDirections};
#[cfg(test)]
pub use geocode_cache_port::MockGeocodeCachePort;
pub use geocode_cache_port::{GeocodeCachePort, GeocodeCacheStats};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use route_store_port::MockRouteStorePort;
pub use route_store_port::{AccountCredentials, RouteStorePort, RouteSubmission, SessionToken};
