//! Integration tests for authenticators

use super::*;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::Mock;

fn client_with(server: &wiremock::MockServer, authenticator: impl Authenticator + 'static) -> DiscoveryV1 {
    DiscoveryV1::builder()
        .version(VERSION)
        .service_url(server.uri())
        .authenticator(authenticator)
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_iam_token_is_fetched_once_and_reused() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=urn%3Aibm%3Aparams%3Aoauth%3Agrant-type%3Aapikey"))
        .and(body_string_contains("apikey=my-api-key"))
        .respond_with(json_response(
            200,
            json!({
                "access_token": "iam-access-token",
                "refresh_token": "not-used",
                "token_type": "Bearer",
                "expires_in": 3600,
                "expiration": 1_900_000_000_i64
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .and(header("authorization", "Bearer iam-access-token"))
        .respond_with(json_response(200, json!({"environments": []})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_with(&server, IamAuthenticator::new("my-api-key").with_url(server.uri()));
    let environments = client.environments();

    environments
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap();
    environments
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_iam_token_failure_stops_the_call() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(error_response(400, "Provided API key could not be found"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(json_response(200, json!({"environments": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with(&server, IamAuthenticator::new("bad-key").with_url(server.uri()));
    let error = client
        .environments()
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(error, DiscoveryError::Authentication(_)));
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn test_iam_token_request_times_out() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(
            json_response(200, json!({"access_token": "late", "expires_in": 3600}))
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(json_response(200, json!({"environments": []})))
        .expect(0)
        .mount(&server)
        .await;

    let authenticator = IamAuthenticator::new("my-api-key")
        .with_url(server.uri())
        .with_timeout(std::time::Duration::from_millis(200));
    let client = client_with(&server, authenticator);

    let started = std::time::Instant::now();
    let error = client
        .environments()
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(error, DiscoveryError::Authentication(_)));
    assert!(started.elapsed() < std::time::Duration::from_secs(3));
}

#[tokio::test]
async fn test_basic_auth_header() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(json_response(200, json!({"environments": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, BasicAuthenticator::new("user", "pass"));
    let response = client
        .environments()
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_bearer_token_header() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .and(header("authorization", "Bearer static-token"))
        .respond_with(json_response(200, json!({"environments": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, BearerTokenAuthenticator::new("static-token"));
    client
        .environments()
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap();
}

#[test]
fn test_quoted_credentials_are_rejected() {
    let result = DiscoveryV1::builder()
        .version(VERSION)
        .authenticator(BasicAuthenticator::new("\"user\"", "pass"))
        .build();

    assert!(matches!(result, Err(DiscoveryError::Configuration(_))));
}
