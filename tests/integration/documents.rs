//! Integration tests for documents

use super::*;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_add_document_multipart() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/collections/c1/documents"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"file\"; filename=\"doc.json\""))
        .and(body_string_contains("{\"title\":\"Watson\"}"))
        .and(body_string_contains("name=\"metadata\""))
        .and(body_string_contains("{\"author\":\"ibm\"}"))
        .respond_with(json_response(202, json!({"document_id": "d1", "status": "processing"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let file = DocumentFile::new(br#"{"title":"Watson"}"#.to_vec())
        .with_filename("doc.json")
        .with_content_type("application/json");
    let options = AddDocumentOptions::new("e1", "c1")
        .with_file(file)
        .with_metadata(r#"{"author":"ibm"}"#);
    let response = client.documents().add_document(&options).await.unwrap();

    assert_eq!(response.status_code, 202);
    let accepted = response.result.unwrap();
    assert_eq!(accepted.document_id.as_deref(), Some("d1"));
    assert_eq!(accepted.status.as_deref(), Some(document_status::PROCESSING));
}

#[tokio::test]
async fn test_add_document_without_content_sends_nothing() {
    let server = setup_mock_server().await;
    let client = client_for(&server);

    let error = client
        .documents()
        .add_document(&AddDocumentOptions::new("e1", "c1"))
        .await
        .unwrap_err();

    assert!(error.is_local());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_document_metadata_only() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/collections/c1/documents/d1"))
        .and(body_string_contains("name=\"metadata\""))
        .respond_with(json_response(202, json!({"document_id": "d1", "status": "processing"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = UpdateDocumentOptions::new("e1", "c1", "d1").with_metadata(r#"{"reviewed":true}"#);
    let response = client.documents().update_document(&options).await.unwrap();

    assert_eq!(response.result.unwrap().document_id.as_deref(), Some("d1"));
}

#[tokio::test]
async fn test_document_status_and_delete() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/collections/c1/documents/d1"))
        .respond_with(json_response(
            200,
            json!({
                "document_id": "d1",
                "status": "available with notices",
                "filename": "doc.json",
                "file_type": "json",
                "notices": [{"notice_id": "index_342", "severity": "warning"}]
            }),
        ))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/e1/collections/c1/documents/d1"))
        .respond_with(json_response(200, json!({"document_id": "d1", "status": "deleted"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let documents = client.documents();

    let status = documents
        .get_document_status(&GetDocumentStatusOptions::new("e1", "c1", "d1"))
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(status.status.as_deref(), Some(document_status::AVAILABLE_WITH_NOTICES));
    assert_eq!(status.filename.as_deref(), Some("doc.json"));

    let deleted = documents
        .delete_document(&DeleteDocumentOptions::new("e1", "c1", "d1"))
        .await
        .unwrap();
    assert_eq!(deleted.result.unwrap().status.as_deref(), Some("deleted"));
}
