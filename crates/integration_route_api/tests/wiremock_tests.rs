//! Integration tests for the route backend client (wiremock-based)

use domain::{Coordinate, DurationPrecision, RouteResult, TravelMode};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_route_api::{
    AuthToken, Credentials, HttpRouteApiClient, RouteApiClient, RouteApiConfig, RouteApiError,
    SavedRoute,
};

fn client_for(server: &MockServer) -> HttpRouteApiClient {
    HttpRouteApiClient::new(&RouteApiConfig::for_testing(server.uri())).unwrap()
}

fn sample_route() -> SavedRoute {
    let route = RouteResult::from_service_units(
        vec![
            Coordinate::new(-13.9626, 33.7874).unwrap(),
            Coordinate::new(-15.7861, 35.0058).unwrap(),
        ],
        312_456.0,
        14_530.0,
        DurationPrecision::WholeMinutes,
    );
    SavedRoute::from_route("Lilongwe", "Blantyre", TravelMode::Car, &route)
}

#[tokio::test]
async fn test_register_created() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .and(body_json(serde_json::json!({
            "username": "chikondi",
            "password": "s3cret"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"username":"chikondi"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .register(&Credentials::new("chikondi", "s3cret"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_register_duplicate_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register/"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"username":["A user with that username already exists."]}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .register(&Credentials::new("chikondi", "s3cret"))
        .await
        .unwrap_err();

    match err {
        RouteApiError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("already exists"));
        },
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_is_form_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/token/login/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=chikondi"))
        .and(body_string_contains("password=s3cret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"token":"9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = client_for(&server)
        .login(&Credentials::new("chikondi", "s3cret"))
        .await
        .unwrap();

    assert_eq!(token.as_str(), "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b");
}

#[tokio::test]
async fn test_login_accepts_auth_token_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/token/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"auth_token":"abc123"}"#))
        .mount(&server)
        .await;

    let token = client_for(&server)
        .login(&Credentials::new("chikondi", "s3cret"))
        .await
        .unwrap();

    assert_eq!(token.as_str(), "abc123");
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/token/login/"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"non_field_errors":["Unable to log in with provided credentials."]}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&Credentials::new("chikondi", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, RouteApiError::Rejected { status: 400, .. }));
}

#[tokio::test]
async fn test_login_unexpected_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/token/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"key":"abc"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&Credentials::new("chikondi", "s3cret"))
        .await
        .unwrap_err();

    assert!(matches!(err, RouteApiError::ParseError(_)));
}

#[tokio::test]
async fn test_save_route_sends_token_and_geometry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/routes/"))
        .and(header("authorization", "Token abc123"))
        .and(body_string_contains("\"LineString\""))
        .and(body_string_contains("\"origin_name\":\"Lilongwe\""))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .save_route(&AuthToken::new("abc123"), &sample_route())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_save_route_with_bearer_scheme() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/routes/"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let config = RouteApiConfig {
        auth_scheme: "Bearer".to_string(),
        ..RouteApiConfig::for_testing(server.uri())
    };
    let client = HttpRouteApiClient::new(&config).unwrap();
    let result = client
        .save_route(&AuthToken::new("abc123"), &sample_route())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_save_route_ok_is_not_created() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/routes/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .save_route(&AuthToken::new("abc123"), &sample_route())
        .await
        .unwrap_err();

    assert!(matches!(err, RouteApiError::Rejected { status: 200, .. }));
}

#[tokio::test]
async fn test_save_route_invalid_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/routes/"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"detail":"Invalid token."}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .save_route(&AuthToken::new("stale"), &sample_route())
        .await
        .unwrap_err();

    assert!(matches!(err, RouteApiError::Rejected { status: 401, .. }));
}
