//! Backend request and response models

use std::fmt;

use domain::{RouteResult, TravelMode};
use geojson::Geometry;
use serde::{Deserialize, Serialize};

/// Username and password for registration and login
#[derive(Clone, Serialize)]
pub struct Credentials {
    /// Account name
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create credentials
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Token returned by a successful login
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// Login response; older backends call the field `auth_token`
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(alias = "auth_token")]
    pub token: String,
}

/// A route as stored by the backend
#[derive(Debug, Clone, Serialize)]
pub struct SavedRoute {
    /// Origin as typed by the user
    pub origin_name: String,
    /// Destination as typed by the user
    pub destination_name: String,
    /// Travel mode
    pub travel_mode: TravelMode,
    /// Kilometers
    pub distance_km: f64,
    /// Minutes
    pub duration_min: f64,
    /// GeoJSON `LineString`, `[lon, lat]` order
    pub geometry: Geometry,
}

impl SavedRoute {
    /// Build the payload for a computed route
    #[must_use]
    pub fn from_route(
        origin_name: impl Into<String>,
        destination_name: impl Into<String>,
        travel_mode: TravelMode,
        route: &RouteResult,
    ) -> Self {
        Self {
            origin_name: origin_name.into(),
            destination_name: destination_name.into(),
            travel_mode,
            distance_km: route.distance_km(),
            duration_min: route.duration_min(),
            geometry: route.to_geojson_geometry(),
        }
    }
}
