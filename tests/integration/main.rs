//! Integration tests using WireMock
//!
//! These tests drive the client against a mock HTTP server and check the
//! complete request/response cycle: URL and query construction, headers,
//! body encoding, response decoding, retries and deadlines.

mod auth;
mod client;
mod collections;
mod configurations;
mod credentials;
mod documents;
mod environments;
mod events;
mod gateways;
mod queries;
mod training_data;
mod user_data;

use std::time::Duration;

use integrations_watson_discovery::prelude::*;
use wiremock::{MockServer, ResponseTemplate};

/// API version date used by every test client.
pub const VERSION: &str = "2019-04-30";

/// Starts a mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Creates a client without credentials that talks to the mock server.
pub fn client_for(server: &MockServer) -> DiscoveryV1 {
    DiscoveryV1::builder()
        .version(VERSION)
        .service_url(server.uri())
        .authenticator(NoAuth)
        .build()
        .expect("Failed to build client")
}

/// Creates a client with fast retries enabled.
pub fn retrying_client_for(server: &MockServer, max_retries: u32) -> DiscoveryV1 {
    DiscoveryV1::builder()
        .version(VERSION)
        .service_url(server.uri())
        .authenticator(NoAuth)
        .retries(
            RetryConfig::new(max_retries, Duration::from_millis(50))
                .with_initial_backoff(Duration::from_millis(10)),
        )
        .build()
        .expect("Failed to build client")
}

/// Helper to create success response templates
pub fn json_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

/// Helper to create error response templates
pub fn error_response(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "code": status,
        "error": message,
    }))
}
