//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: OpenRouteService for
//! geocoding and directions, the route backend for persistence, and an
//! in-memory LRU for geocode caching. Also owns configuration loading and
//! tracing setup.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use cache::LruGeocodeCache;
pub use config::{AppConfig, BackendAppConfig, OrsAppConfig, ResolverAppConfig, RoutingAppConfig};
pub use telemetry::{LoggingConfig, TelemetryError, init_tracing};
