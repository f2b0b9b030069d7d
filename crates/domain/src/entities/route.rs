//! Route request and result entities

use std::fmt;

use geojson::{Feature, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};

use crate::travel_time::{format_travel_time, minutes_from_f64};
use crate::value_objects::{Coordinate, TravelMode};

/// A request for directions between two resolved coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    /// Start of the route
    pub origin: Coordinate,
    /// End of the route
    pub destination: Coordinate,
    /// Travel mode, selects the routing profile
    pub mode: TravelMode,
}

impl RouteRequest {
    /// Create a new route request
    #[must_use]
    pub const fn new(origin: Coordinate, destination: Coordinate, mode: TravelMode) -> Self {
        Self {
            origin,
            destination,
            mode,
        }
    }
}

/// Rounding applied to route durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPrecision {
    /// Round to the nearest whole minute
    #[default]
    WholeMinutes,
    /// Round to two decimal places
    Hundredths,
}

impl DurationPrecision {
    /// Convert seconds to minutes with this precision
    #[must_use]
    pub fn minutes_from_seconds(self, seconds: f64) -> f64 {
        let minutes = seconds / 60.0;
        match self {
            Self::WholeMinutes => minutes.round(),
            Self::Hundredths => round2(minutes),
        }
    }
}

/// A computed route: geometry in traversal order plus summary statistics
///
/// An empty result (no coordinates, zero distance and duration) represents
/// the "no route" state after a failed lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    coordinates: Vec<Coordinate>,
    distance_km: f64,
    duration_min: f64,
    label: String,
}

impl RouteResult {
    /// Build a result from raw service units
    ///
    /// Distance is converted from meters to kilometers rounded to two
    /// decimals, duration from seconds to minutes with `precision`.
    #[must_use]
    pub fn from_service_units(
        coordinates: Vec<Coordinate>,
        distance_m: f64,
        duration_s: f64,
        precision: DurationPrecision,
    ) -> Self {
        let distance_km = round2(distance_m / 1000.0);
        let duration_min = precision.minutes_from_seconds(duration_s);
        let label = format!(
            "Distance: {distance_km:?} km | Duration: {}",
            format_travel_time(minutes_from_f64(duration_min))
        );
        Self {
            coordinates,
            distance_km,
            duration_min,
            label,
        }
    }

    /// The "no route" value
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            coordinates: Vec::new(),
            distance_km: 0.0,
            duration_min: 0.0,
            label: String::new(),
        }
    }

    /// Whether this result has no geometry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Route geometry as `(lat, lon)` coordinates in traversal order
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Distance in kilometers, two decimals
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Duration in minutes
    #[must_use]
    pub const fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// Duration rounded to whole minutes for display
    #[must_use]
    pub fn duration_whole_minutes(&self) -> u32 {
        minutes_from_f64(self.duration_min)
    }

    /// Display label, e.g. `"Distance: 312.46 km | Duration: 4h 2m"`
    ///
    /// Whole kilometres keep one decimal (`"5.0 km"`).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// GeoJSON `LineString` geometry in `[lon, lat]` order
    #[must_use]
    pub fn to_geojson_geometry(&self) -> Geometry {
        let line = self
            .coordinates
            .iter()
            .map(|c| c.to_lon_lat().to_vec())
            .collect();
        Geometry::new(Value::LineString(line))
    }

    /// The route as a GeoJSON feature with summary properties
    #[must_use]
    pub fn to_geojson_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("distance_km".to_string(), self.distance_km.into());
        properties.insert("duration_min".to_string(), self.duration_min.into());
        properties.insert("label".to_string(), self.label.clone().into());

        Feature {
            bbox: None,
            geometry: Some(self.to_geojson_geometry()),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl Default for RouteResult {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "No route")
        } else {
            write!(f, "{}", self.label)
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
