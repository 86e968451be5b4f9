//! Integration tests for configurations

use super::*;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_create_configuration_with_enrichment() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/configurations"))
        .and(body_json(json!({
            "name": "nlu-config",
            "enrichments": [{
                "destination_field": "enriched_text",
                "source_field": "text",
                "enrichment": "natural_language_understanding"
            }]
        })))
        .respond_with(json_response(
            201,
            json!({"configuration_id": "cfg1", "name": "nlu-config", "created": "2019-04-30T10:00:00.000Z"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = CreateConfigurationOptions {
        enrichments: Some(vec![Enrichment {
            destination_field: "enriched_text".to_string(),
            source_field: "text".to_string(),
            enrichment: "natural_language_understanding".to_string(),
            ..Default::default()
        }]),
        ..CreateConfigurationOptions::new("e1", "nlu-config")
    };
    let response = client.configurations().create_configuration(&options).await.unwrap();

    let configuration = response.result.unwrap();
    assert_eq!(configuration.configuration_id.as_deref(), Some("cfg1"));
    assert!(configuration.created.is_some());
}

#[tokio::test]
async fn test_list_get_delete_configuration() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/configurations"))
        .and(query_param("version", VERSION))
        .respond_with(json_response(
            200,
            json!({"configurations": [{"configuration_id": "cfg1", "name": "Default Configuration"}]}),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/configurations/cfg1"))
        .respond_with(json_response(200, json!({"configuration_id": "cfg1", "name": "Default Configuration"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/e1/configurations/cfg1"))
        .respond_with(json_response(
            200,
            json!({
                "configuration_id": "cfg1",
                "status": "deleted",
                "notices": [{"notice_id": "configuration_in_use", "severity": "warning"}]
            }),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let configurations = client.configurations();

    let list = configurations
        .list_configurations(&ListConfigurationsOptions::new("e1"))
        .await
        .unwrap();
    assert_eq!(list.result.unwrap().configurations.unwrap().len(), 1);

    let fetched = configurations
        .get_configuration(&GetConfigurationOptions::new("e1", "cfg1"))
        .await
        .unwrap();
    assert_eq!(fetched.result.unwrap().name.as_deref(), Some("Default Configuration"));

    let deleted = configurations
        .delete_configuration(&DeleteConfigurationOptions::new("e1", "cfg1"))
        .await
        .unwrap();
    let deleted = deleted.result.unwrap();
    assert_eq!(deleted.status.as_deref(), Some("deleted"));
    assert_eq!(
        deleted.notices.unwrap()[0].severity.as_deref(),
        Some(notice_severity::WARNING)
    );
}

#[tokio::test]
async fn test_update_configuration_replaces_document() {
    let server = setup_mock_server().await;

    Mock::given(method("PUT"))
        .and(path("/v1/environments/e1/configurations/cfg1"))
        .and(body_json(json!({"name": "renamed"})))
        .respond_with(json_response(200, json!({"configuration_id": "cfg1", "name": "renamed"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .configurations()
        .update_configuration(&UpdateConfigurationOptions::new("e1", "cfg1", "renamed"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
}
