//! Integration tests for events, the query log and metrics

use super::*;
use chrono::{TimeZone, Utc};
use integrations_watson_discovery::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_create_click_event() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/events"))
        .and(body_json(json!({
            "type": "click",
            "data": {
                "environment_id": "e1",
                "session_token": "tok-1",
                "collection_id": "c1",
                "document_id": "d1",
                "display_rank": 1
            }
        })))
        .respond_with(json_response(
            201,
            json!({"type": "click", "data": {"environment_id": "e1", "session_token": "tok-1", "query_id": "q1"}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data = EventData {
        display_rank: Some(1),
        ..EventData::new("e1", "tok-1", "c1", "d1")
    };
    let response = client
        .events()
        .create_event(&CreateEventOptions::new(event_type::CLICK, data))
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(response.result.unwrap().data.unwrap().query_id.as_deref(), Some("q1"));
}

#[tokio::test]
async fn test_query_log() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/logs"))
        .and(query_param("query", "natural_language_query:password"))
        .and(query_param("count", "10"))
        .respond_with(json_response(
            200,
            json!({
                "matching_results": 1,
                "results": [{
                    "environment_id": "e1",
                    "natural_language_query": "reset my password",
                    "document_type": "query",
                    "created_timestamp": "2019-04-30T12:00:00.000Z"
                }]
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = QueryLogOptions::new()
        .with_query("natural_language_query:password")
        .with_count(10);
    let response = client.events().query_log(&options).await.unwrap();

    let entry = &response.result.unwrap().results.unwrap()[0];
    assert_eq!(entry.document_type.as_deref(), Some("query"));
    assert!(entry.created_timestamp.is_some());
}

#[tokio::test]
async fn test_metrics_event_rate_window() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/metrics/event_rate"))
        .and(query_param("start_time", "2019-04-01T00:00:00.000Z"))
        .and(query_param("end_time", "2019-04-30T00:00:00.000Z"))
        .and(query_param("result_type", "document"))
        .respond_with(json_response(
            200,
            json!({
                "aggregations": [{
                    "interval": "1d",
                    "event_type": "click",
                    "results": [{
                        "key_as_string": "2019-04-01T00:00:00.000Z",
                        "key": 1554076800000_i64,
                        "matching_results": 40,
                        "event_rate": 0.25
                    }]
                }]
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = GetMetricsEventRateOptions::new()
        .with_window(
            Utc.with_ymd_and_hms(2019, 4, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2019, 4, 30, 0, 0, 0).unwrap(),
        )
        .with_result_type(result_type::DOCUMENT);
    let response = client.events().get_metrics_event_rate(&options).await.unwrap();

    let aggregation = &response.result.unwrap().aggregations.unwrap()[0];
    let bucket = &aggregation.results.as_ref().unwrap()[0];
    assert_eq!(bucket.event_rate, Some(0.25));
    assert_eq!(bucket.key, Some(1_554_076_800_000));
}

#[tokio::test]
async fn test_metrics_without_window_sends_only_version() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/metrics/number_of_queries_with_no_search_results"))
        .respond_with(json_response(200, json!({"aggregations": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .events()
        .get_metrics_query_no_results(&GetMetricsQueryNoResultsOptions::new())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("version=2019-04-30"));
}

#[tokio::test]
async fn test_metrics_query_token_event() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/metrics/top_query_tokens_with_event_rate"))
        .and(query_param("count", "2"))
        .respond_with(json_response(
            200,
            json!({"aggregations": [{"event_type": "click", "results": [
                {"key": "password", "matching_results": 20, "event_rate": 0.4},
                {"key": "reset", "matching_results": 12, "event_rate": 0.1}
            ]}]}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .events()
        .get_metrics_query_token_event(&GetMetricsQueryTokenEventOptions::new().with_count(2))
        .await
        .unwrap();

    let aggregation = &response.result.unwrap().aggregations.unwrap()[0];
    assert_eq!(aggregation.results.as_ref().unwrap()[1].key.as_deref(), Some("reset"));
}
