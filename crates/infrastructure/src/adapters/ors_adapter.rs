//! OpenRouteService adapter - Implements GeocodingPort and DirectionsPort using integration_ors

use application::error::{ApplicationError, RoutingFailure};
use application::ports::{DirectionsPort, GeocodingPort, RawDirections};
use async_trait::async_trait;
use domain::{Coordinate, RouteRequest};
use integration_ors::{
    DirectionsClient, GeocodingClient, OrsConfig, OrsDirectionsClient, OrsError,
    OrsGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter for geocoding and routing via OpenRouteService
pub struct OrsAdapter {
    geocoding_client: Box<dyn GeocodingClient>,
    directions_client: Box<dyn DirectionsClient>,
}

impl std::fmt::Debug for OrsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsAdapter")
            .field("geocoding_client", &"GeocodingClient")
            .field("directions_client", &"DirectionsClient")
            .finish()
    }
}

impl OrsAdapter {
    /// Create an adapter with HTTP clients for `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP clients
    /// fail to initialize.
    pub fn new(config: &OrsConfig) -> Result<Self, ApplicationError> {
        let geocoding_client = OrsGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        let directions_client = OrsDirectionsClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::from_clients(
            Box::new(geocoding_client),
            Box::new(directions_client),
        ))
    }

    /// Create an adapter around existing clients
    #[must_use]
    pub fn from_clients(
        geocoding_client: Box<dyn GeocodingClient>,
        directions_client: Box<dyn DirectionsClient>,
    ) -> Self {
        Self {
            geocoding_client,
            directions_client,
        }
    }

    /// Classify an ORS error as a routing failure
    fn routing_failure(error: OrsError) -> RoutingFailure {
        match error {
            OrsError::Status { status, body } => RoutingFailure::Status { status, body },
            OrsError::NoResults(_) => RoutingFailure::NoRoute,
            OrsError::ParseError(msg) => RoutingFailure::Decode(msg),
            e @ (OrsError::ConnectionFailed(_)
            | OrsError::Timeout { .. }
            | OrsError::ConfigurationError(_)) => RoutingFailure::Transport(e.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for OrsAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, text: &str) -> Result<Option<Coordinate>, ApplicationError> {
        match self.geocoding_client.geocode(text).await {
            Ok(coordinate) => Ok(Some(coordinate)),
            Err(OrsError::NoResults(_)) => {
                debug!(%text, "No geocoding match");
                Ok(None)
            },
            Err(e) => Err(ApplicationError::ExternalService(format!(
                "Geocoding failed: {e}"
            ))),
        }
    }
}

#[async_trait]
impl DirectionsPort for OrsAdapter {
    #[instrument(skip(self))]
    async fn directions(&self, request: &RouteRequest) -> Result<RawDirections, RoutingFailure> {
        let route = self
            .directions_client
            .directions(request.origin, request.destination, request.mode)
            .await
            .map_err(Self::routing_failure)?;

        Ok(RawDirections {
            coordinates: route.coordinates,
            distance_m: route.distance_m,
            duration_s: route.duration_s,
        })
    }
}
