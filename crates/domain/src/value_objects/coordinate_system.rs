//! Coordinate reference systems for numeric location input
//!
//! A numeric pair typed by the user is interpreted according to the selected
//! [`CoordinateSystem`]. WGS-84 pairs are read in the configured [`AxisOrder`];
//! UTM pairs are always `easting, northing` and are projected back to WGS-84
//! with the Krüger series for the inverse transverse Mercator projection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use crate::errors::DomainError;

/// WGS-84 semi-major axis in meters
const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 flattening
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// Angle multipliers `2j` of the Krüger series terms
const SERIES_MULTIPLIERS: [f64; 3] = [2.0, 4.0, 6.0];
/// UTM central meridian scale factor
const UTM_K0: f64 = 0.9996;
/// UTM false easting in meters
const UTM_FALSE_EASTING: f64 = 500_000.0;
/// UTM false northing for the southern hemisphere in meters
const UTM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Which number of a WGS-84 pair is the latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrder {
    /// First number is longitude (x), second is latitude (y)
    #[default]
    LonLat,
    /// First number is latitude, second is longitude
    LatLon,
}

impl AxisOrder {
    /// Arrange a raw `(first, second)` pair into `(latitude, longitude)`
    #[must_use]
    pub const fn to_lat_lon(self, first: f64, second: f64) -> (f64, f64) {
        match self {
            Self::LonLat => (second, first),
            Self::LatLon => (first, second),
        }
    }
}

impl fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LonLat => write!(f, "lonlat"),
            Self::LatLon => write!(f, "latlon"),
        }
    }
}

impl FromStr for AxisOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' ', ','], "").as_str() {
            "lonlat" | "xy" => Ok(Self::LonLat),
            "latlon" | "yx" => Ok(Self::LatLon),
            _ => Err(DomainError::InvalidAxisOrder(s.to_string())),
        }
    }
}

/// Hemisphere of a UTM zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// Northern hemisphere (false northing 0 m)
    North,
    /// Southern hemisphere (false northing 10 000 km)
    South,
}

/// Coordinate reference system of a numeric location pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CoordinateSystem {
    /// Geographic latitude/longitude (EPSG:4326)
    #[default]
    Wgs84,
    /// Universal Transverse Mercator on the WGS-84 ellipsoid
    Utm {
        /// Zone number, 1 to 60
        zone: u8,
        /// Hemisphere of the zone
        hemisphere: Hemisphere,
    },
}

impl CoordinateSystem {
    /// Create a UTM system after validating the zone number
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinateSystem` if `zone` is not in 1..=60.
    pub fn utm(zone: u8, hemisphere: Hemisphere) -> Result<Self, DomainError> {
        if !(1..=60).contains(&zone) {
            return Err(DomainError::InvalidCoordinateSystem(format!(
                "UTM zone must be between 1 and 60, got {zone}"
            )));
        }
        Ok(Self::Utm { zone, hemisphere })
    }

    /// Interpret a raw numeric pair in this system and return a WGS-84 coordinate
    ///
    /// `axis_order` only applies to WGS-84 input; projected pairs are always
    /// `easting, northing`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the resulting position is
    /// outside the WGS-84 range.
    pub fn to_wgs84(
        &self,
        first: f64,
        second: f64,
        axis_order: AxisOrder,
    ) -> Result<Coordinate, DomainError> {
        match *self {
            Self::Wgs84 => {
                let (latitude, longitude) = axis_order.to_lat_lon(first, second);
                Coordinate::new(latitude, longitude)
            },
            Self::Utm { zone, hemisphere } => {
                let (latitude, longitude) = utm_to_lat_lon(first, second, zone, hemisphere);
                Coordinate::new(latitude, longitude)
            },
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wgs84 => write!(f, "wgs84"),
            Self::Utm { zone, hemisphere } => {
                let h = match hemisphere {
                    Hemisphere::North => 'N',
                    Hemisphere::South => 'S',
                };
                write!(f, "utm:{zone}{h}")
            },
        }
    }
}

impl FromStr for CoordinateSystem {
    type Err = DomainError;

    /// Accepts `wgs84`, `epsg:4326`, `utm:33N`, `utm33s`, `epsg:32633` and `epsg:32733`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        let invalid = || DomainError::InvalidCoordinateSystem(s.to_string());

        if matches!(normalized.as_str(), "wgs84" | "epsg:4326" | "4326") {
            return Ok(Self::Wgs84);
        }

        if let Some(code) = normalized.strip_prefix("epsg:") {
            let code: u32 = code.parse().map_err(|_| invalid())?;
            let (hemisphere, zone) = match code {
                32601..=32660 => (Hemisphere::North, code - 32600),
                32701..=32760 => (Hemisphere::South, code - 32700),
                _ => return Err(invalid()),
            };
            let zone = u8::try_from(zone).map_err(|_| invalid())?;
            return Self::utm(zone, hemisphere);
        }

        let rest = normalized.strip_prefix("utm").ok_or_else(invalid)?;
        let rest = rest.strip_prefix(':').unwrap_or(rest);
        let (digits, hemisphere) = if let Some(d) = rest.strip_suffix('n') {
            (d, Hemisphere::North)
        } else if let Some(d) = rest.strip_suffix('s') {
            (d, Hemisphere::South)
        } else {
            (rest, Hemisphere::North)
        };
        let zone: u8 = digits.parse().map_err(|_| invalid())?;
        Self::utm(zone, hemisphere)
    }
}

impl TryFrom<String> for CoordinateSystem {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoordinateSystem> for String {
    fn from(value: CoordinateSystem) -> Self {
        value.to_string()
    }
}

/// Inverse transverse Mercator (Krüger series to third order in `n`)
///
/// Returns `(latitude, longitude)` in degrees. Accuracy is well below a
/// millimeter inside the zone.
fn utm_to_lat_lon(easting: f64, northing: f64, zone: u8, hemisphere: Hemisphere) -> (f64, f64) {
    let n = WGS84_F / (2.0 - WGS84_F);
    let n2 = n * n;
    let n3 = n2 * n;

    let big_a = WGS84_A / (1.0 + n) * (1.0 + n2 / 4.0 + n2 * n2 / 64.0);

    let beta = [
        n / 2.0 - 2.0 / 3.0 * n2 + 37.0 / 96.0 * n3,
        n2 / 48.0 + n3 / 15.0,
        17.0 / 480.0 * n3,
    ];
    let delta = [
        2.0 * n - 2.0 / 3.0 * n2 - 2.0 * n3,
        7.0 / 3.0 * n2 - 8.0 / 5.0 * n3,
        56.0 / 15.0 * n3,
    ];

    let false_northing = match hemisphere {
        Hemisphere::North => 0.0,
        Hemisphere::South => UTM_FALSE_NORTHING_SOUTH,
    };

    let xi = (northing - false_northing) / (UTM_K0 * big_a);
    let eta = (easting - UTM_FALSE_EASTING) / (UTM_K0 * big_a);

    let mut xi_prime = xi;
    let mut eta_prime = eta;
    for (k, b) in SERIES_MULTIPLIERS.iter().zip(beta) {
        xi_prime -= b * (k * xi).sin() * (k * eta).cosh();
        eta_prime -= b * (k * xi).cos() * (k * eta).sinh();
    }

    let chi = (xi_prime.sin() / eta_prime.cosh()).asin();
    let mut phi = chi;
    for (k, d) in SERIES_MULTIPLIERS.iter().zip(delta) {
        phi += d * (k * chi).sin();
    }

    let central_meridian = f64::from(zone) * 6.0 - 183.0;
    let lambda = eta_prime.sinh().atan2(xi_prime.cos());

    (phi.to_degrees(), central_meridian + lambda.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_order_default_is_lon_lat() {
        assert_eq!(AxisOrder::default(), AxisOrder::LonLat);
    }

    #[test]
    fn test_axis_order_to_lat_lon() {
        assert_eq!(AxisOrder::LonLat.to_lat_lon(-14.0, 33.8), (33.8, -14.0));
        assert_eq!(AxisOrder::LatLon.to_lat_lon(-14.0, 33.8), (-14.0, 33.8));
    }

    #[test]
    fn test_axis_order_parse() {
        assert_eq!("lonlat".parse::<AxisOrder>().unwrap(), AxisOrder::LonLat);
        assert_eq!("lat-lon".parse::<AxisOrder>().unwrap(), AxisOrder::LatLon);
        assert_eq!("Lat,Lon".parse::<AxisOrder>().unwrap(), AxisOrder::LatLon);
        assert!("north-first".parse::<AxisOrder>().is_err());
    }

    #[test]
    fn test_wgs84_pair_uses_axis_order() {
        let crs = CoordinateSystem::Wgs84;
        let coord = crs.to_wgs84(-14.0, 33.8, AxisOrder::LonLat).unwrap();
        assert!((coord.latitude() - 33.8).abs() < f64::EPSILON);
        assert!((coord.longitude() + 14.0).abs() < f64::EPSILON);

        let coord = crs.to_wgs84(-14.0, 33.8, AxisOrder::LatLon).unwrap();
        assert!((coord.latitude() + 14.0).abs() < f64::EPSILON);
        assert!((coord.longitude() - 33.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wgs84_pair_out_of_range() {
        let crs = CoordinateSystem::Wgs84;
        assert!(crs.to_wgs84(10.0, 95.0, AxisOrder::LonLat).is_err());
        assert!(crs.to_wgs84(95.0, 10.0, AxisOrder::LatLon).is_err());
    }

    #[test]
    fn test_utm_origin_of_zone_is_on_equator_and_central_meridian() {
        let crs = CoordinateSystem::utm(33, Hemisphere::North).unwrap();
        let coord = crs.to_wgs84(500_000.0, 0.0, AxisOrder::LatLon).unwrap();
        assert!(coord.latitude().abs() < 1e-9);
        assert!((coord.longitude() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_utm_central_meridian_keeps_longitude() {
        let crs = CoordinateSystem::utm(36, Hemisphere::South).unwrap();
        let coord = crs.to_wgs84(500_000.0, 8_450_000.0, AxisOrder::LonLat).unwrap();
        assert!((coord.longitude() - 33.0).abs() < 1e-9);
        assert!(coord.latitude() < 0.0);
        assert!(coord.latitude() > -15.0);
    }

    #[test]
    fn test_utm_known_point_eiffel_tower() {
        // 31U 448251.795 5411932.678
        let crs = CoordinateSystem::utm(31, Hemisphere::North).unwrap();
        let coord = crs
            .to_wgs84(448_251.795, 5_411_932.678, AxisOrder::LonLat)
            .unwrap();
        assert!((coord.latitude() - 48.858_37).abs() < 1e-3);
        assert!((coord.longitude() - 2.294_48).abs() < 1e-3);
    }

    #[test]
    fn test_utm_zone_validation() {
        assert!(CoordinateSystem::utm(0, Hemisphere::North).is_err());
        assert!(CoordinateSystem::utm(61, Hemisphere::North).is_err());
        assert!(CoordinateSystem::utm(60, Hemisphere::South).is_ok());
    }

    #[test]
    fn test_parse_coordinate_system() {
        assert_eq!(
            "wgs84".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::Wgs84
        );
        assert_eq!(
            "EPSG:4326".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::Wgs84
        );
        assert_eq!(
            "utm:36S".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::Utm {
                zone: 36,
                hemisphere: Hemisphere::South
            }
        );
        assert_eq!(
            "utm33n".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::Utm {
                zone: 33,
                hemisphere: Hemisphere::North
            }
        );
        assert_eq!(
            "epsg:32736".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::Utm {
                zone: 36,
                hemisphere: Hemisphere::South
            }
        );
    }

    #[test]
    fn test_parse_coordinate_system_invalid() {
        assert!("mercator".parse::<CoordinateSystem>().is_err());
        assert!("utm:99N".parse::<CoordinateSystem>().is_err());
        assert!("epsg:3857".parse::<CoordinateSystem>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let crs = CoordinateSystem::utm(36, Hemisphere::South).unwrap();
        assert_eq!(crs.to_string(), "utm:36S");
        assert_eq!(crs.to_string().parse::<CoordinateSystem>().unwrap(), crs);
    }

    #[test]
    fn test_serde_as_string() {
        let crs = CoordinateSystem::utm(33, Hemisphere::North).unwrap();
        assert_eq!(serde_json::to_string(&crs).unwrap(), "\"utm:33N\"");
        let parsed: CoordinateSystem = serde_json::from_str("\"wgs84\"").unwrap();
        assert_eq!(parsed, CoordinateSystem::Wgs84);
    }
}
