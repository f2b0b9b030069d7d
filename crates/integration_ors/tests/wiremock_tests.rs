//! Integration tests for the ORS clients (wiremock-based)

use domain::{Coordinate, TravelMode};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_ors::{
    DirectionsClient, GeocodingClient, OrsConfig, OrsDirectionsClient, OrsError,
    OrsGeocodingClient,
};

const fn sample_geocode_json() -> &'static str {
    r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [33.787359, -13.962612] },
            "properties": { "label": "Lilongwe, Central Region, Malawi" }
        }]
    }"#
}

const fn sample_directions_json() -> &'static str {
    r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "summary": { "distance": 312456.3, "duration": 14530.2 }
            },
            "geometry": {
                "type": "LineString",
                "coordinates": [[33.7874, -13.9626], [34.2, -14.5], [35.0058, -15.7861]]
            }
        }]
    }"#
}

fn lilongwe() -> Coordinate {
    Coordinate::new(-13.9626, 33.7874).unwrap()
}

fn blantyre() -> Coordinate {
    Coordinate::new(-15.7861, 35.0058).unwrap()
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("text", "Lilongwe"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_geocode_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let coordinate = client.geocode("Lilongwe").await.unwrap();

    assert!((coordinate.latitude() - -13.962_612).abs() < 1e-9);
    assert!((coordinate.longitude() - 33.787_359).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_no_features() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"features": []}"#))
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let err = client.geocode("Nowhere at all").await.unwrap_err();

    assert!(matches!(err, OrsError::NoResults(_)));
}

#[tokio::test]
async fn test_geocode_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string(r#"{"error":"Access to this API has been disallowed"}"#),
        )
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let err = client.geocode("Lilongwe").await.unwrap_err();

    match err {
        OrsError::Status { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("disallowed"));
        },
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = OrsGeocodingClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let err = client.geocode("Lilongwe").await.unwrap_err();

    assert!(matches!(err, OrsError::ParseError(_)));
}

#[tokio::test]
async fn test_directions_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/directions/driving-car"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("start", "33.7874,-13.9626"))
        .and(query_param("end", "35.0058,-15.7861"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrsDirectionsClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let route = client
        .directions(lilongwe(), blantyre(), TravelMode::Car)
        .await
        .unwrap();

    assert_eq!(route.coordinates.len(), 3);
    assert_eq!(route.coordinates[0], lilongwe());
    assert!((route.distance_m - 312_456.3).abs() < 1e-9);
    assert!((route.duration_s - 14_530.2).abs() < 1e-9);
}

#[tokio::test]
async fn test_directions_uses_mode_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/directions/cycling-regular"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_directions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OrsDirectionsClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let result = client
        .directions(lilongwe(), blantyre(), TravelMode::Bike)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_directions_not_found_keeps_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/directions/foot-walking"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"error":{"code":2010,"message":"Could not find routable point"}}"#,
        ))
        .mount(&server)
        .await;

    let client = OrsDirectionsClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let err = client
        .directions(lilongwe(), blantyre(), TravelMode::Walk)
        .await
        .unwrap_err();

    match err {
        OrsError::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("routable point"));
        },
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_directions_empty_features() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/directions/driving-car"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"features": []}"#))
        .mount(&server)
        .await;

    let client = OrsDirectionsClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let err = client
        .directions(lilongwe(), blantyre(), TravelMode::Car)
        .await
        .unwrap_err();

    assert!(matches!(err, OrsError::NoResults(_)));
}

#[tokio::test]
async fn test_directions_missing_summary_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/directions/driving-car"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"features": [{"geometry": {"coordinates": [[33.8, -14.0]]}, "properties": {}}]}"#,
        ))
        .mount(&server)
        .await;

    let client = OrsDirectionsClient::new(&OrsConfig::for_testing(server.uri())).unwrap();
    let err = client
        .directions(lilongwe(), blantyre(), TravelMode::Car)
        .await
        .unwrap_err();

    assert!(matches!(err, OrsError::ParseError(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on port 1
    let client = OrsDirectionsClient::new(&OrsConfig::for_testing("http://127.0.0.1:1")).unwrap();
    let err = client
        .directions(lilongwe(), blantyre(), TravelMode::Car)
        .await
        .unwrap_err();

    assert!(matches!(err, OrsError::ConnectionFailed(_)));
}
