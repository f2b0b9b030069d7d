//! Location resolution and route statistics settings

use application::ResolverConfig;
use domain::{AxisOrder, CoordinateSystem, DurationPrecision};
use serde::{Deserialize, Serialize};

/// Location resolver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverAppConfig {
    /// Reading order of WGS-84 pairs: `lonlat` (default) or `latlon`
    #[serde(default)]
    pub axis_order: AxisOrder,

    /// Coordinate system of numeric input, e.g. `wgs84` or `utm:36S`
    #[serde(default)]
    pub crs: CoordinateSystem,

    /// Geocode cache size in entries (0 disables caching)
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

const fn default_cache_capacity() -> usize {
    256
}

impl Default for ResolverAppConfig {
    fn default() -> Self {
        Self {
            axis_order: AxisOrder::default(),
            crs: CoordinateSystem::default(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl ResolverAppConfig {
    /// Convert to the application layer's `ResolverConfig`
    #[must_use]
    pub const fn to_resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            axis_order: self.axis_order,
            default_crs: self.crs,
        }
    }
}

/// Route statistics configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingAppConfig {
    /// `whole_minutes` (default) or `hundredths`
    #[serde(default)]
    pub duration_precision: DurationPrecision,
}

#[cfg(test)]
mod tests {
    use domain::Hemisphere;

    use super::*;

    #[test]
    fn resolver_defaults() {
        let config = ResolverAppConfig::default();
        assert_eq!(config.axis_order, AxisOrder::LonLat);
        assert_eq!(config.crs, CoordinateSystem::Wgs84);
        assert_eq!(config.cache_capacity, 256);
    }

    #[test]
    fn resolver_from_json() {
        let config: ResolverAppConfig =
            serde_json::from_str(r#"{"axis_order": "latlon", "crs": "epsg:32736"}"#).unwrap();
        assert_eq!(config.axis_order, AxisOrder::LatLon);
        assert_eq!(
            config.crs,
            CoordinateSystem::utm(36, Hemisphere::South).unwrap()
        );
        assert_eq!(config.cache_capacity, 256);

        let resolver = config.to_resolver_config();
        assert_eq!(resolver.axis_order, AxisOrder::LatLon);
        assert_eq!(resolver.default_crs, config.crs);
    }

    #[test]
    fn resolver_rejects_unknown_crs() {
        let result = serde_json::from_str::<ResolverAppConfig>(r#"{"crs": "mars:1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn routing_precision_from_json() {
        let config: RoutingAppConfig =
            serde_json::from_str(r#"{"duration_precision": "hundredths"}"#).unwrap();
        assert_eq!(config.duration_precision, DurationPrecision::Hundredths);
        assert_eq!(
            RoutingAppConfig::default().duration_precision,
            DurationPrecision::WholeMinutes
        );
    }
}
