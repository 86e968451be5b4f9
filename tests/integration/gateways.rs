//! Integration tests for gateways

use super::*;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_gateway_lifecycle() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/gateways"))
        .and(body_json(json!({"name": "on-prem"})))
        .respond_with(json_response(
            200,
            json!({"gateway_id": "gw1", "name": "on-prem", "status": "idle", "token": "secret-token", "token_id": "tid1"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/gateways"))
        .respond_with(json_response(200, json!({"gateways": [{"gateway_id": "gw1", "status": "connected"}]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/gateways/gw1"))
        .respond_with(json_response(200, json!({"gateway_id": "gw1", "status": "connected"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/e1/gateways/gw1"))
        .respond_with(json_response(200, json!({"gateway_id": "gw1", "status": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let gateways = client.gateways();

    let created = gateways
        .create_gateway(&CreateGatewayOptions::new("e1").with_name("on-prem"))
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(created.status.as_deref(), Some(gateway_status::IDLE));
    assert_eq!(created.token_id.as_deref(), Some("tid1"));

    let list = gateways.list_gateways(&ListGatewaysOptions::new("e1")).await.unwrap();
    assert_eq!(list.result.unwrap().gateways.unwrap().len(), 1);

    let fetched = gateways.get_gateway(&GetGatewayOptions::new("e1", "gw1")).await.unwrap();
    assert_eq!(
        fetched.result.unwrap().status.as_deref(),
        Some(gateway_status::CONNECTED)
    );

    let deleted = gateways
        .delete_gateway(&DeleteGatewayOptions::new("e1", "gw1"))
        .await
        .unwrap();
    assert_eq!(deleted.result.unwrap().status.as_deref(), Some("deleted"));
}
