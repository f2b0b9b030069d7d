//! OpenRouteService integration for Njira
//!
//! Provides free-text geocoding via the ORS
//! [Pelias](https://openrouteservice.org/dev/#/api-docs/geocode) endpoint and
//! turn-by-turn routing via the ORS
//! [directions](https://openrouteservice.org/dev/#/api-docs/v2/directions) endpoint.
//!
//! # Architecture
//!
//! [`GeocodingClient`] converts a place name to a coordinate and is implemented
//! by [`OrsGeocodingClient`]. [`DirectionsClient`] requests a route between two
//! coordinates and is implemented by [`OrsDirectionsClient`]. Both share one
//! [`OrsConfig`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::TravelMode;
//! use integration_ors::{DirectionsClient, OrsConfig, OrsDirectionsClient};
//!
//! let config = OrsConfig::new("my-api-key");
//! let client = OrsDirectionsClient::new(&config)?;
//!
//! let route = client.directions(origin, destination, TravelMode::Car).await?;
//! println!("{} m in {} s", route.distance_m, route.duration_s);
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{DirectionsClient, OrsDirectionsClient};
pub use config::OrsConfig;
pub use error::OrsError;
pub use geocoding::{GeocodingClient, OrsGeocodingClient};
pub use models::{
    DirectionsResponse, GeocodeFeature, GeocodeResponse, PointGeometry, RawRoute, RouteFeature,
    RouteGeometry, RouteProperties, RouteSummary,
};
