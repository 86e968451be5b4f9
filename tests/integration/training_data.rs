//! Integration tests for training data

use super::*;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

const TRAINING_PATH: &str = "/v1/environments/e1/collections/c1/training_data";

#[tokio::test]
async fn test_add_and_list_training_data() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path(TRAINING_PATH))
        .and(body_json(json!({
            "natural_language_query": "how to reset a password",
            "examples": [{"document_id": "d1", "relevance": 10}]
        })))
        .respond_with(json_response(
            200,
            json!({"query_id": "q1", "natural_language_query": "how to reset a password", "examples": [{"document_id": "d1", "relevance": 10}]}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TRAINING_PATH))
        .respond_with(json_response(
            200,
            json!({"environment_id": "e1", "collection_id": "c1", "queries": [{"query_id": "q1"}]}),
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let training = client.training_data();

    let options = AddTrainingDataOptions::new("e1", "c1")
        .with_natural_language_query("how to reset a password")
        .with_examples(vec![TrainingExample::new("d1", 10)]);
    let query = training.add_training_data(&options).await.unwrap().result.unwrap();
    assert_eq!(query.query_id.as_deref(), Some("q1"));
    assert_eq!(query.examples.unwrap()[0].relevance, Some(10));

    let set = training
        .list_training_data(&ListTrainingDataOptions::new("e1", "c1"))
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(set.queries.unwrap().len(), 1);
}

#[tokio::test]
async fn test_training_examples() {
    let server = setup_mock_server().await;
    let examples_path = format!("{}/q1/examples", TRAINING_PATH);
    let example_path = format!("{}/q1/examples/d2", TRAINING_PATH);

    Mock::given(method("POST"))
        .and(path(examples_path.as_str()))
        .and(body_json(json!({"document_id": "d2", "relevance": 0})))
        .respond_with(json_response(201, json!({"document_id": "d2", "relevance": 0})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(example_path.as_str()))
        .and(body_json(json!({"relevance": 5})))
        .respond_with(json_response(200, json!({"document_id": "d2", "relevance": 5})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(examples_path.as_str()))
        .respond_with(json_response(200, json!({"examples": [{"document_id": "d2", "relevance": 5}]})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(example_path.as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let training = client.training_data();

    let created = training
        .create_training_example(
            &CreateTrainingExampleOptions::new("e1", "c1", "q1")
                .with_document_id("d2")
                .with_relevance(0),
        )
        .await
        .unwrap();
    assert_eq!(created.status_code, 201);

    let updated = training
        .update_training_example(&UpdateTrainingExampleOptions::new("e1", "c1", "q1", "d2").with_relevance(5))
        .await
        .unwrap();
    assert_eq!(updated.result.unwrap().relevance, Some(5));

    let list = training
        .list_training_examples(&ListTrainingExamplesOptions::new("e1", "c1", "q1"))
        .await
        .unwrap();
    assert_eq!(list.result.unwrap().examples.unwrap().len(), 1);

    let deleted = training
        .delete_training_example(&DeleteTrainingExampleOptions::new("e1", "c1", "q1", "d2"))
        .await
        .unwrap();
    assert_eq!(deleted.status_code, 204);
}

#[tokio::test]
async fn test_delete_all_training_data() {
    let server = setup_mock_server().await;

    Mock::given(method("DELETE"))
        .and(path(TRAINING_PATH))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .training_data()
        .delete_all_training_data(&DeleteAllTrainingDataOptions::new("e1", "c1"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 204);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_missing_query_id_sends_nothing() {
    let server = setup_mock_server().await;
    let client = client_for(&server);

    let error = client
        .training_data()
        .get_training_data(&GetTrainingDataOptions::new("e1", "c1", ""))
        .await
        .unwrap_err();

    assert!(matches!(error, DiscoveryError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
