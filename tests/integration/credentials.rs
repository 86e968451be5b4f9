//! Integration tests for source credentials

use super::*;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_create_sharepoint_credentials() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/credentials"))
        .and(body_json(json!({
            "source_type": "sharepoint",
            "credential_details": {
                "credential_type": "saml",
                "username": "crawler@example.com",
                "organization_url": "https://example.sharepoint.com",
                "site_collection.path": "/sites/docs",
                "password": "hunter2"
            }
        })))
        .respond_with(json_response(
            200,
            json!({
                "credential_id": "cr1",
                "source_type": "sharepoint",
                "credential_details": {
                    "credential_type": "saml",
                    "username": "crawler@example.com",
                    "site_collection.path": "/sites/docs"
                },
                "status": {"authenticated": true}
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let details = CredentialDetails {
        credential_type: Some(credential_type::SAML.to_string()),
        username: Some("crawler@example.com".to_string()),
        organization_url: Some("https://example.sharepoint.com".to_string()),
        site_collection_path: Some("/sites/docs".to_string()),
        password: Some("hunter2".to_string()),
        ..Default::default()
    };
    let options = CreateCredentialsOptions::new("e1")
        .with_source_type(credential_source_type::SHAREPOINT)
        .with_credential_details(details);
    let response = client.credentials().create_credentials(&options).await.unwrap();

    let credentials = response.result.unwrap();
    assert_eq!(credentials.credential_id.as_deref(), Some("cr1"));
    assert_eq!(
        credentials.credential_details.unwrap().site_collection_path.as_deref(),
        Some("/sites/docs")
    );
    assert_eq!(credentials.status.unwrap().authenticated, Some(true));
}

#[tokio::test]
async fn test_list_get_update_delete_credentials() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/credentials"))
        .respond_with(json_response(200, json!({"credentials": [{"credential_id": "cr1", "source_type": "box"}]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/credentials/cr1"))
        .respond_with(json_response(200, json!({"credential_id": "cr1", "source_type": "box"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/environments/e1/credentials/cr1"))
        .and(body_json(json!({"source_type": "web_crawl", "credential_details": {"credential_type": "noauth", "url": "https://example.com"}})))
        .respond_with(json_response(200, json!({"credential_id": "cr1", "source_type": "web_crawl"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/e1/credentials/cr1"))
        .respond_with(json_response(200, json!({"credential_id": "cr1", "status": "deleted"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let credentials = client.credentials();

    let list = credentials
        .list_credentials(&ListCredentialsOptions::new("e1"))
        .await
        .unwrap();
    assert_eq!(list.result.unwrap().credentials.unwrap().len(), 1);

    let fetched = credentials
        .get_credentials(&GetCredentialsOptions::new("e1", "cr1"))
        .await
        .unwrap();
    assert_eq!(
        fetched.result.unwrap().source_type.as_deref(),
        Some(credential_source_type::BOX)
    );

    let details = CredentialDetails {
        credential_type: Some(credential_type::NOAUTH.to_string()),
        url: Some("https://example.com".to_string()),
        ..Default::default()
    };
    let updated = credentials
        .update_credentials(
            &UpdateCredentialsOptions::new("e1", "cr1")
                .with_source_type(credential_source_type::WEB_CRAWL)
                .with_credential_details(details),
        )
        .await
        .unwrap();
    assert_eq!(updated.status_code, 200);

    let deleted = credentials
        .delete_credentials(&DeleteCredentialsOptions::new("e1", "cr1"))
        .await
        .unwrap();
    assert_eq!(deleted.result.unwrap().status.as_deref(), Some("deleted"));
}
