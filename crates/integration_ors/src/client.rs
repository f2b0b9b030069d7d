//! ORS directions client

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, TravelMode};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::OrsConfig;
use crate::error::OrsError;
use crate::geocoding::USER_AGENT;
use crate::models::{DirectionsResponse, RawRoute};

/// Trait for routing clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Request the recommended route between two coordinates
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<RawRoute, OrsError>;
}

/// Directions client backed by OpenRouteService
#[derive(Debug)]
pub struct OrsDirectionsClient {
    client: Client,
    config: OrsConfig,
}

impl OrsDirectionsClient {
    /// Create a new ORS directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OrsConfig) -> Result<Self, OrsError> {
        config.validate().map_err(OrsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| OrsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn directions_url(&self, mode: TravelMode) -> String {
        format!("{}/v2/directions/{}", self.config.base_url(), mode.profile())
    }
}

#[async_trait]
impl DirectionsClient for OrsDirectionsClient {
    #[instrument(skip(self), fields(profile = mode.profile()))]
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<RawRoute, OrsError> {
        let url = self.directions_url(mode);
        let start = origin.to_wire_string();
        let end = destination.to_wire_string();
        let params = [
            ("api_key", self.config.api_key.as_str()),
            ("start", start.as_str()),
            ("end", end.as_str()),
        ];

        debug!(%start, %end, "Requesting directions");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| OrsError::from_reqwest(&e, self.config.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), %body, "Directions request rejected");
            return Err(OrsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| OrsError::ParseError(e.to_string()))?;

        let route = parsed.into_route(mode.profile())?;
        debug!(
            points = route.coordinates.len(),
            distance_m = route.distance_m,
            duration_s = route.duration_s,
            "Received route"
        );
        Ok(route)
    }
}
