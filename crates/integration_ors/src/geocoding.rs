//! ORS geocoding client
//!
//! Converts free-form place names to coordinates using the ORS
//! `/geocode/search` endpoint. Only the best match is used.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::OrsConfig;
use crate::error::OrsError;
use crate::models::GeocodeResponse;

pub(crate) const USER_AGENT: &str = concat!("Njira/", env!("CARGO_PKG_VERSION"));

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a place name to the coordinate of its best match
    async fn geocode(&self, text: &str) -> Result<Coordinate, OrsError>;
}

/// Geocoding client backed by OpenRouteService
#[derive(Debug)]
pub struct OrsGeocodingClient {
    client: Client,
    config: OrsConfig,
}

impl OrsGeocodingClient {
    /// Create a new ORS geocoding client
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
}

#[async_trait]
impl GeocodingClient for OrsGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, text: &str) -> Result<Coordinate, OrsError> {
        let url = format!("{}/geocode/search", self.config.base_url());
        let params = [("api_key", self.config.api_key.as_str()), ("text", text)];

        debug!(%text, "Geocoding place name");

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
            return Err(OrsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let results: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| OrsError::ParseError(e.to_string()))?;

        let coordinate = results.best_match(text)?;
        debug!(%text, %coordinate, "Geocoded place name");
        Ok(coordinate)
    }
}
