//! Integration tests for queries

use super::*;
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_query_with_aggregation_and_passages() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/collections/c1/query"))
        .and(query_param("version", VERSION))
        .and(header("X-Watson-Logging-Opt-Out", "true"))
        .and(body_json(json!({
            "natural_language_query": "cloud pricing",
            "passages": true,
            "passages.fields": "text,title",
            "aggregation": "term(enriched_text.entities.text,count:5)",
            "count": 3
        })))
        .respond_with(json_response(
            200,
            json!({
                "matching_results": 24,
                "session_token": "tok-1",
                "results": [{
                    "id": "d1",
                    "collection_id": "c1",
                    "result_metadata": {"score": 4.2},
                    "title": "Pricing"
                }],
                "aggregations": [{
                    "type": "term",
                    "field": "enriched_text.entities.text",
                    "results": [{"key": "IBM", "matching_results": 12}]
                }],
                "passages": [{"document_id": "d1", "passage_text": "Pay as you go", "passage_score": 9.1}]
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = QueryOptions::new("e1", "c1")
        .with_parameters(QueryParameters {
            natural_language_query: Some("cloud pricing".to_string()),
            passages: Some(true),
            passages_fields: vec!["text".to_string(), "title".to_string()],
            aggregation: Some("term(enriched_text.entities.text,count:5)".to_string()),
            count: Some(3),
            ..Default::default()
        })
        .with_logging_opt_out(true);
    let response = client.queries().query(&options).await.unwrap();

    let result = response.result.unwrap();
    assert_eq!(result.matching_results, Some(24));
    assert_eq!(result.session_token.as_deref(), Some("tok-1"));

    let first = &result.results.as_ref().unwrap()[0];
    assert_eq!(first.id.as_deref(), Some("d1"));
    assert_eq!(first.fields["title"], json!("Pricing"));

    let aggregation = &result.aggregations.as_ref().unwrap()[0];
    assert_eq!(aggregation.aggregation_type.as_deref(), Some("term"));
    assert_eq!(aggregation.extra["field"], json!("enriched_text.entities.text"));
    assert_eq!(aggregation.results.as_ref().unwrap()[0].key, Some(json!("IBM")));

    assert_eq!(
        result.passages.unwrap()[0].passage_text.as_deref(),
        Some("Pay as you go")
    );
}

#[tokio::test]
async fn test_federated_query() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/environments/e1/query"))
        .and(body_json(json!({"collection_ids": "c1,c2", "query": "text:watson"})))
        .respond_with(json_response(
            200,
            json!({"matching_results": 2, "results": [{"id": "a", "collection_id": "c1"}, {"id": "b", "collection_id": "c2"}]}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = FederatedQueryOptions::new("e1", vec!["c1".to_string(), "c2".to_string()]).with_parameters(
        QueryParameters {
            query: Some("text:watson".to_string()),
            ..Default::default()
        },
    );
    let response = client.queries().federated_query(&options).await.unwrap();

    let results = response.result.unwrap().results.unwrap();
    assert_eq!(results[1].collection_id.as_deref(), Some("c2"));
}

#[tokio::test]
async fn test_query_notices() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/collections/c1/notices"))
        .and(query_param("filter", "notices.severity::error"))
        .and(query_param("count", "5"))
        .and(query_param("sort", "-notices.created,filename"))
        .respond_with(json_response(
            200,
            json!({
                "matching_results": 1,
                "results": [{
                    "id": "d9",
                    "filename": "broken.pdf",
                    "notices": [{"notice_id": "index_failed", "severity": "error"}]
                }]
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = QueryNoticesOptions::new("e1", "c1").with_parameters(NoticesParameters {
        filter: Some("notices.severity::error".to_string()),
        count: Some(5),
        sort: vec!["-notices.created".to_string(), "filename".to_string()],
        ..Default::default()
    });
    let response = client.queries().query_notices(&options).await.unwrap();

    let result = &response.result.unwrap().results.unwrap()[0];
    assert_eq!(result.filename.as_deref(), Some("broken.pdf"));
    assert_eq!(
        result.notices.as_ref().unwrap()[0].severity.as_deref(),
        Some(notice_severity::ERROR)
    );
}

#[tokio::test]
async fn test_federated_query_notices() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/notices"))
        .and(query_param("collection_ids", "c1,c2"))
        .and(query_param("natural_language_query", "failed pdf"))
        .respond_with(json_response(200, json!({"matching_results": 0, "results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = FederatedQueryNoticesOptions::new("e1", vec!["c1".to_string(), "c2".to_string()])
        .with_parameters(NoticesParameters {
            natural_language_query: Some("failed pdf".to_string()),
            ..Default::default()
        });
    let response = client.queries().federated_query_notices(&options).await.unwrap();

    assert_eq!(response.result.unwrap().matching_results, Some(0));
}

#[tokio::test]
async fn test_get_autocompletion() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/environments/e1/collections/c1/autocompletion"))
        .and(query_param("prefix", "wat"))
        .and(query_param("field", "title"))
        .and(query_param("count", "3"))
        .respond_with(json_response(200, json!({"completions": ["watson", "water", "watt"]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = GetAutocompletionOptions::new("e1", "c1", "wat")
        .with_field("title")
        .with_count(3);
    let response = client.queries().get_autocompletion(&options).await.unwrap();

    assert_eq!(
        response.result.unwrap().completions.unwrap(),
        vec!["watson".to_string(), "water".to_string(), "watt".to_string()]
    );
}
