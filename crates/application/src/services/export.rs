//! Route export

use domain::{RouteResult, TravelMode};

use crate::error::ApplicationError;

/// A route as a pretty-printed GeoJSON `Feature` document
///
/// The geometry is a `LineString` in `[lon, lat]` order. Properties carry the
/// summary statistics and the endpoints as typed.
pub fn route_to_geojson(
    route: &RouteResult,
    origin: &str,
    destination: &str,
    mode: TravelMode,
) -> Result<String, ApplicationError> {
    let mut feature = route.to_geojson_feature();
    feature.set_property("origin", origin);
    feature.set_property("destination", destination);
    feature.set_property("mode", mode.to_string());
    feature.set_property("profile", mode.profile());

    serde_json::to_string_pretty(&feature)
        .map_err(|e| ApplicationError::Internal(format!("GeoJSON serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use domain::{Coordinate, DurationPrecision};

    use super::*;

    #[test]
    fn test_route_to_geojson() {
        let route = RouteResult::from_service_units(
            vec![
                Coordinate::new(-13.9626, 33.7874).unwrap(),
                Coordinate::new(-15.7861, 35.0058).unwrap(),
            ],
            312_456.0,
            14_530.0,
            DurationPrecision::WholeMinutes,
        );

        let text = route_to_geojson(&route, "Lilongwe", "Blantyre", TravelMode::Car).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "LineString");
        assert_eq!(json["geometry"]["coordinates"][1][0], 35.0058);
        assert_eq!(json["geometry"]["coordinates"][1][1], -15.7861);
        assert_eq!(json["properties"]["origin"], "Lilongwe");
        assert_eq!(json["properties"]["destination"], "Blantyre");
        assert_eq!(json["properties"]["profile"], "driving-car");
        assert_eq!(json["properties"]["distance_km"], 312.46);
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_empty_route_has_empty_line() {
        let text =
            route_to_geojson(&RouteResult::empty(), "a", "b", TravelMode::Walk).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["geometry"]["coordinates"], serde_json::json!([]));
    }
}
