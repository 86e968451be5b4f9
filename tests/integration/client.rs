//! Integration tests for request construction, decoding, retries and deadlines

use super::*;
use integrations_watson_discovery::errors::ConfigurationError;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Read;
use std::time::Duration;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_empty_service_url_fails_before_sending() {
    let client = DiscoveryV1::builder()
        .version(VERSION)
        .service_url("")
        .authenticator(NoAuth)
        .build()
        .unwrap();

    let error = client
        .environments()
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        DiscoveryError::Configuration(ConfigurationError::MissingServiceUrl)
    ));
    assert!(error.to_string().contains("service URL is missing"));
}

#[tokio::test]
async fn test_sdk_and_custom_headers() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .and(header(
            "X-IBMCloud-SDK-Analytics",
            "service_name=discovery;service_version=V1;operation_id=ListEnvironments",
        ))
        .and(header_exists("user-agent"))
        .and(header("X-Global", "global"))
        .and(header("X-Trace", "per-call"))
        .respond_with(json_response(200, json!({"environments": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = DiscoveryV1::builder()
        .version(VERSION)
        .service_url(server.uri())
        .authenticator(NoAuth)
        .header("X-Global", "global")
        .header("X-Trace", "default")
        .build()
        .unwrap();

    let options = ListEnvironmentsOptions::new().with_header("X-Trace", "per-call");
    let response = client.environments().list_environments(&options).await.unwrap();

    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_response_headers_are_exposed() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1"))
        .respond_with(
            json_response(200, json!({"environment_id": "e1"}))
                .insert_header("X-Global-Transaction-Id", "txn-42"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .environments()
        .get_environment(&GetEnvironmentOptions::new("e1"))
        .await
        .unwrap();

    assert_eq!(response.header("x-global-transaction-id"), Some("txn-42"));
}

#[tokio::test]
async fn test_empty_body_yields_no_result() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .environments()
        .get_environment(&GetEnvironmentOptions::new("e1"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .environments()
        .get_environment(&GetEnvironmentOptions::new("e1"))
        .await
        .unwrap_err();

    match error {
        DiscoveryError::Deserialization { status, body, .. } => {
            assert_eq!(status, 200);
            assert_eq!(&body[..], b"{not json");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_not_retried() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let client = retrying_client_for(&server, 3);
    let error = client
        .environments()
        .get_environment(&GetEnvironmentOptions::new("e1"))
        .await
        .unwrap_err();

    assert!(matches!(error, DiscoveryError::Deserialization { .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_server_error_then_success_with_retries() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(error_response(500, "Internal Server Error"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(json_response(200, json!({"environments": [{"environment_id": "e1"}]})))
        .mount(&server)
        .await;

    let client = retrying_client_for(&server, 2);
    let response = client
        .environments()
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap();

    assert_eq!(response.result.unwrap().environments.unwrap().len(), 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_server_error_without_retries() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(error_response(503, "Service Unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .environments()
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(503));
    assert!(error.is_retryable());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1"))
        .respond_with(error_response(400, "Invalid version"))
        .mount(&server)
        .await;

    let client = retrying_client_for(&server, 3);
    let error = client
        .environments()
        .get_environment(&GetEnvironmentOptions::new("e1"))
        .await
        .unwrap_err();

    match &error {
        DiscoveryError::Api { status, message, code, .. } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Invalid version");
            assert_eq!(code.as_deref(), Some("400"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_rate_limit_honors_retry_after() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(error_response(429, "Too Many Requests").insert_header("Retry-After", "0"))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(json_response(200, json!({"environments": []})))
        .mount(&server)
        .await;

    let client = retrying_client_for(&server, 3);
    client
        .environments()
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_deadline_bounds_slow_calls() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(json_response(200, json!({"environments": []})).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = retrying_client_for(&server, 3);
    let error = client
        .with_timeout(Duration::from_millis(100))
        .environments()
        .list_environments(&ListEnvironmentsOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(error, DiscoveryError::DeadlineExceeded { .. }));
}

#[tokio::test]
async fn test_call_succeeds_after_disabling_retries_without_deadline() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .respond_with(json_response(200, json!({"environments": []})).set_delay(Duration::from_millis(300)))
        .mount(&server)
        .await;

    let mut client = retrying_client_for(&server, 3);
    let options = ListEnvironmentsOptions::new();
    let error = client
        .with_timeout(Duration::from_millis(50))
        .environments()
        .list_environments(&options)
        .await
        .unwrap_err();
    assert!(matches!(error, DiscoveryError::DeadlineExceeded { .. }));

    client.disable_retries();
    let response = client.environments().list_environments(&options).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert!(client.config().retry.is_none());
}

#[tokio::test]
async fn test_gzip_request_body() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments"))
        .and(header("content-encoding", "gzip"))
        .and(header("content-type", "application/json"))
        .respond_with(json_response(201, json!({"environment_id": "e1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = DiscoveryV1::builder()
        .version(VERSION)
        .service_url(server.uri())
        .authenticator(NoAuth)
        .enable_gzip_compression(true)
        .build()
        .unwrap();
    client
        .environments()
        .create_environment(&CreateEnvironmentOptions::new("zipped"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let mut decoded = String::new();
    flate2::read::GzDecoder::new(&requests[0].body[..])
        .read_to_string(&mut decoded)
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&decoded).unwrap();
    assert_eq!(body, json!({"name": "zipped"}));
}

#[tokio::test]
async fn test_query_parameters_keep_version_first() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/collections"))
        .respond_with(json_response(200, json!({"collections": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .collections()
        .list_collections(&ListCollectionsOptions::new("e1").with_name("docs"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("version=2019-04-30&name=docs"));
}

#[tokio::test]
async fn test_path_parameters_are_escaped() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/env%2F1"))
        .respond_with(json_response(200, json!({"environment_id": "env/1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .environments()
        .get_environment(&GetEnvironmentOptions::new("env/1"))
        .await
        .unwrap();

    assert_eq!(response.result.unwrap().environment_id.as_deref(), Some("env/1"));
}
