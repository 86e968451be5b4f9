//! Integration tests for environments

use super::*;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_create_environment() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments"))
        .and(query_param("version", VERSION))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"name": "my-env", "description": "test", "size": "LT"})))
        .respond_with(json_response(
            201,
            json!({"environment_id": "EnvironmentID", "name": "my-env", "status": "active", "size": "LT"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = CreateEnvironmentOptions::new("my-env")
        .with_description("test")
        .with_size(environment_size::LT);
    let response = client.environments().create_environment(&options).await.unwrap();

    assert_eq!(response.status_code, 201);
    let environment = response.result.unwrap();
    assert_eq!(environment.environment_id.as_deref(), Some("EnvironmentID"));
    assert_eq!(environment.status.as_deref(), Some(environment_status::ACTIVE));
}

#[tokio::test]
async fn test_list_environments_by_name() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments"))
        .and(query_param("name", "my-env"))
        .respond_with(json_response(
            200,
            json!({"environments": [{"environment_id": "e1", "name": "my-env", "read_only": false}]}),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .environments()
        .list_environments(&ListEnvironmentsOptions::new().with_name("my-env"))
        .await
        .unwrap();

    let environments = response.result.unwrap().environments.unwrap();
    assert_eq!(environments.len(), 1);
    assert_eq!(environments[0].read_only, Some(false));
}

#[tokio::test]
async fn test_update_and_delete_environment() {
    let server = setup_mock_server().await;

    Mock::given(method("PUT"))
        .and(path("/v1/environments/e1"))
        .and(body_json(json!({"name": "renamed"})))
        .respond_with(json_response(200, json!({"environment_id": "e1", "name": "renamed"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/e1"))
        .respond_with(json_response(200, json!({"environment_id": "e1", "status": "deleted"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let environments = client.environments();

    let updated = environments
        .update_environment(&UpdateEnvironmentOptions::new("e1").with_name("renamed"))
        .await
        .unwrap();
    assert_eq!(updated.result.unwrap().name.as_deref(), Some("renamed"));

    let deleted = environments
        .delete_environment(&DeleteEnvironmentOptions::new("e1"))
        .await
        .unwrap();
    assert_eq!(deleted.result.unwrap().status.as_deref(), Some("deleted"));
}

#[tokio::test]
async fn test_list_fields_joins_collection_ids() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/fields"))
        .and(query_param("collection_ids", "c1,c2"))
        .respond_with(json_response(
            200,
            json!({"fields": [{"field": "title", "type": "string"}]}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = ListFieldsOptions::new("e1", vec!["c1".to_string(), "c2".to_string()]);
    let response = client.environments().list_fields(&options).await.unwrap();

    assert_eq!(response.result.unwrap().fields.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_environment_not_found() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/missing"))
        .respond_with(error_response(404, "Environment not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .environments()
        .get_environment(&GetEnvironmentOptions::new("missing"))
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(404));
    match error {
        DiscoveryError::Api { message, .. } => assert_eq!(message, "Environment not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}
