//! Location resolver
//!
//! Turns user text into a WGS-84 coordinate. Numeric pairs are parsed
//! locally in the configured coordinate system; everything else goes through
//! the geocode cache and then the geocoding port.

use std::{fmt, sync::Arc};

use domain::{AxisOrder, Coordinate, CoordinateSystem, LocationQuery};
use tracing::{debug, instrument, warn};

use crate::{
    error::ResolveError,
    ports::{GeocodeCachePort, GeocodingPort},
};

/// How numeric input is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Reading order of a WGS-84 pair
    pub axis_order: AxisOrder,
    /// Coordinate system used when the caller does not name one
    pub default_crs: CoordinateSystem,
}

/// Resolves location text to coordinates
pub struct LocationResolver {
    geocoder: Arc<dyn GeocodingPort>,
    cache: Option<Arc<dyn GeocodeCachePort>>,
    config: ResolverConfig,
}

impl fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationResolver")
            .field("has_cache", &self.cache.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LocationResolver {
    /// Create a resolver without a cache
    #[must_use]
    pub fn new(geocoder: Arc<dyn GeocodingPort>, config: ResolverConfig) -> Self {
        Self {
            geocoder,
            cache: None,
            config,
        }
    }

    /// Attach a geocode cache
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn GeocodeCachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `text` in the default coordinate system
    pub async fn resolve_default(&self, text: &str) -> Result<Coordinate, ResolveError> {
        self.resolve(text, self.config.default_crs).await
    }

    /// Resolve `text` to a coordinate
    ///
    /// A `number, number` pair is read in `crs` without any network call.
    /// Other text is geocoded once per distinct (case-insensitive) name while
    /// it stays in the cache. Geocoder failures of any kind are reported as
    /// `NotFound`; the cause is logged.
    #[instrument(skip(self), fields(crs = %crs))]
    pub async fn resolve(
        &self,
        text: &str,
        crs: CoordinateSystem,
    ) -> Result<Coordinate, ResolveError> {
        let query = LocationQuery::new(text).map_err(|_| ResolveError::EmptyInput)?;

        if let Some((first, second)) = query.numeric_pair() {
            return crs
                .to_wgs84(first, second, self.config.axis_order)
                .map_err(|e| ResolveError::InvalidCoordinates {
                    input: query.as_str().trim().to_string(),
                    reason: e.to_string(),
                })
                .inspect(|coordinate| debug!(%coordinate, "Parsed numeric location"));
        }

        let key = query.cache_key();
        if let Some(coordinate) = self.cache.as_ref().and_then(|cache| cache.get(&key)) {
            debug!(%key, "Geocode cache hit");
            return Ok(coordinate);
        }

        let name = query.as_str().trim();
        match self.geocoder.geocode(name).await {
            Ok(Some(coordinate)) => {
                if let Some(cache) = &self.cache {
                    cache.put(&key, coordinate);
                }
                debug!(%coordinate, "Geocoded location");
                Ok(coordinate)
            },
            Ok(None) => {
                debug!(%name, "Geocoder found no match");
                Err(ResolveError::NotFound(name.to_string()))
            },
            Err(e) => {
                warn!(error = %e, %name, "Geocoding failed");
                Err(ResolveError::NotFound(name.to_string()))
            },
        }
    }
}
