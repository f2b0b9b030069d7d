//! ORS response models
//!
//! Only the fields Njira reads are modelled. They are required: a response
//! missing any of them fails to decode instead of being silently defaulted.
//! The one exception is the route summary, where ORS leaves out `distance`
//! and `duration` for zero-length routes.

use domain::Coordinate;
use serde::Deserialize;

use crate::error::OrsError;

/// `GET /geocode/search` response
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Matches, best first
    pub features: Vec<GeocodeFeature>,
}

/// A single geocoding match
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeFeature {
    /// Point geometry of the match
    pub geometry: PointGeometry,
}

/// GeoJSON point, `[lon, lat]`
#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    /// Longitude then latitude
    pub coordinates: [f64; 2],
}

impl GeocodeResponse {
    /// Coordinate of the best match
    ///
    /// # Errors
    ///
    /// `NoResults` when there are no features, `ParseError` when the point is
    /// outside the valid coordinate range.
    pub fn best_match(&self, text: &str) -> Result<Coordinate, OrsError> {
        let feature = self
            .features
            .first()
            .ok_or_else(|| OrsError::NoResults(text.to_string()))?;
        Coordinate::from_lon_lat(feature.geometry.coordinates)
            .map_err(|e| OrsError::ParseError(e.to_string()))
    }
}

/// `GET /v2/directions/{profile}` response (GeoJSON flavour)
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Route alternatives, the first is the recommended one
    pub features: Vec<RouteFeature>,
}

/// One route
#[derive(Debug, Clone, Deserialize)]
pub struct RouteFeature {
    /// Line geometry
    pub geometry: RouteGeometry,
    /// Route properties
    pub properties: RouteProperties,
}

/// GeoJSON line string, `[[lon, lat], ...]`
#[derive(Debug, Clone, Deserialize)]
pub struct RouteGeometry {
    /// Points in traversal order
    pub coordinates: Vec<[f64; 2]>,
}

/// Route properties
#[derive(Debug, Clone, Deserialize)]
pub struct RouteProperties {
    /// Totals for the route
    pub summary: RouteSummary,
}

/// Route totals in service units
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RouteSummary {
    /// Meters
    #[serde(default)]
    pub distance: f64,
    /// Seconds
    #[serde(default)]
    pub duration: f64,
}

/// First route of a directions response, geometry converted to coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct RawRoute {
    /// Points in traversal order
    pub coordinates: Vec<Coordinate>,
    /// Meters
    pub distance_m: f64,
    /// Seconds
    pub duration_s: f64,
}

impl DirectionsResponse {
    /// Extract the first route
    ///
    /// # Errors
    ///
    /// `NoResults` when there are no features, `ParseError` when a point is
    /// outside the valid coordinate range.
    pub fn into_route(self, profile: &str) -> Result<RawRoute, OrsError> {
        let feature = self
            .features
            .into_iter()
            .next()
            .ok_or_else(|| OrsError::NoResults(format!("route ({profile})")))?;

        let coordinates = feature
            .geometry
            .coordinates
            .into_iter()
            .map(Coordinate::from_lon_lat)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| OrsError::ParseError(e.to_string()))?;

        Ok(RawRoute {
            coordinates,
            distance_m: feature.properties.summary.distance,
            duration_s: feature.properties.summary.duration,
        })
    }
}
