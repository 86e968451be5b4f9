//! Integration tests for collections

use super::*;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_collection() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/collections"))
        .and(body_json(json!({"name": "docs", "configuration_id": "cfg1", "language": "en"})))
        .respond_with(json_response(
            201,
            json!({"collection_id": "c1", "name": "docs", "status": "pending", "language": "en"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = CreateCollectionOptions::new("e1", "docs")
        .with_configuration_id("cfg1")
        .with_language(collection_language::EN);
    let response = client.collections().create_collection(&options).await.unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(response.result.unwrap().collection_id.as_deref(), Some("c1"));
}

#[tokio::test]
async fn test_delete_collection() {
    let server = setup_mock_server().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/environments/e1/collections/c1"))
        .respond_with(json_response(200, json!({"collection_id": "c1", "status": "deleted"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .collections()
        .delete_collection(&DeleteCollectionOptions::new("e1", "c1"))
        .await
        .unwrap();

    assert_eq!(response.result.unwrap().status.as_deref(), Some("deleted"));
}

#[tokio::test]
async fn test_get_collection_document_counts() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/collections/c1"))
        .respond_with(json_response(
            200,
            json!({"collection_id": "c1", "document_counts": {"available": 12, "processing": 1, "failed": 0, "pending": 0}}),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .collections()
        .get_collection(&GetCollectionOptions::new("e1", "c1"))
        .await
        .unwrap();

    let counts = response.result.unwrap().document_counts.unwrap();
    assert_eq!(counts.available, Some(12));
}

#[tokio::test]
async fn test_expansions_lifecycle() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/collections/c1/expansions"))
        .and(body_json(json!({"expansions": [
            {"input_terms": ["car"], "expanded_terms": ["car", "automobile"]},
            {"expanded_terms": ["ibm", "international business machines"]}
        ]})))
        .respond_with(json_response(
            200,
            json!({"expansions": [{"input_terms": ["car"], "expanded_terms": ["car", "automobile"]}]}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/environments/e1/collections/c1/expansions"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let collections = client.collections();

    let expansions = vec![
        Expansion {
            input_terms: Some(vec!["car".to_string()]),
            expanded_terms: vec!["car".to_string(), "automobile".to_string()],
        },
        Expansion {
            input_terms: None,
            expanded_terms: vec!["ibm".to_string(), "international business machines".to_string()],
        },
    ];
    let created = collections
        .create_expansions(&CreateExpansionsOptions::new("e1", "c1", expansions))
        .await
        .unwrap();
    assert_eq!(created.result.unwrap().expansions.len(), 1);

    let deleted = collections
        .delete_expansions(&DeleteExpansionsOptions::new("e1", "c1"))
        .await
        .unwrap();
    assert_eq!(deleted.status_code, 204);
    assert!(deleted.result.is_none());
}

#[tokio::test]
async fn test_create_stopword_list_multipart() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/collections/c1/word_lists/stopwords"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"stopword_file\"; filename=\"stopwords.txt\""))
        .and(body_string_contains("the\na\nan"))
        .respond_with(json_response(200, json!({"status": "pending", "type": "stopwords"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = CreateStopwordListOptions::new("e1", "c1", "the\na\nan".as_bytes().to_vec(), "stopwords.txt");
    let response = client.collections().create_stopword_list(&options).await.unwrap();

    let status = response.result.unwrap();
    assert_eq!(status.status.as_deref(), Some(word_list_status::PENDING));
    assert_eq!(status.list_type.as_deref(), Some("stopwords"));
}

#[tokio::test]
async fn test_tokenization_dictionary() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/collections/c1/word_lists/tokenization_dictionary"))
        .and(body_json(json!({"tokenization_rules": [{
            "text": "すしネコ",
            "tokens": ["すし", "ネコ"],
            "readings": ["寿司", "ネコ"],
            "part_of_speech": "カスタム名詞"
        }]})))
        .respond_with(json_response(202, json!({"status": "pending", "type": "tokenization_dictionary"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/collections/c1/word_lists/tokenization_dictionary"))
        .respond_with(json_response(200, json!({"status": "active", "type": "tokenization_dictionary"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let collections = client.collections();

    let rule = TokenDictRule {
        text: "すしネコ".to_string(),
        tokens: vec!["すし".to_string(), "ネコ".to_string()],
        readings: Some(vec!["寿司".to_string(), "ネコ".to_string()]),
        part_of_speech: "カスタム名詞".to_string(),
    };
    let created = collections
        .create_tokenization_dictionary(&CreateTokenizationDictionaryOptions::new("e1", "c1").with_rules(vec![rule]))
        .await
        .unwrap();
    assert_eq!(created.status_code, 202);

    let status = collections
        .get_tokenization_dictionary_status(&GetTokenizationDictionaryStatusOptions::new("e1", "c1"))
        .await
        .unwrap();
    assert_eq!(status.result.unwrap().status.as_deref(), Some(word_list_status::ACTIVE));
}
