//! Event, query log and metrics types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Event types.
pub mod event_type {
    /// A click on a query result.
    pub const CLICK: &str = "click";
}

/// Result types of metrics and log entries.
pub mod result_type {
    /// Document results.
    pub const DOCUMENT: &str = "document";
}

/// Formats a timestamp the way the metrics endpoints expect.
pub(crate) fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Data of a click event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventData {
    /// Environment of the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    /// Session token returned by the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// Client-side time of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timestamp: Option<DateTime<Utc>>,
    /// Rank of the clicked result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_rank: Option<i64>,
    /// Collection of the clicked document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Clicked document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Query the event belongs to; set by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
}

impl EventData {
    /// Creates click data for a result of the session's query.
    pub fn new(
        environment_id: impl Into<String>,
        session_token: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            session_token: Some(session_token.into()),
            collection_id: Some(collection_id.into()),
            document_id: Some(document_id.into()),
            ..Default::default()
        }
    }
}

/// Response of create_event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateEventResponse {
    /// Event type.
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// Recorded event data.
    pub data: Option<EventData>,
}

/// Response of query_log.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogQueryResponse {
    /// Number of matching entries.
    pub matching_results: Option<i64>,
    /// Log entries.
    pub results: Option<Vec<LogQueryResponseResult>>,
}

/// A query log entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogQueryResponseResult {
    /// Environment ID.
    pub environment_id: Option<String>,
    /// Customer ID.
    pub customer_id: Option<String>,
    /// `query` or `event`.
    pub document_type: Option<String>,
    /// Natural language query.
    pub natural_language_query: Option<String>,
    /// Documents returned for the query.
    pub document_results: Option<LogQueryResponseResultDocuments>,
    /// Server time of the entry.
    pub created_timestamp: Option<DateTime<Utc>>,
    /// Client time of an event.
    pub client_timestamp: Option<DateTime<Utc>>,
    /// Query ID.
    pub query_id: Option<String>,
    /// Session token.
    pub session_token: Option<String>,
    /// Collection ID.
    pub collection_id: Option<String>,
    /// Rank of a clicked result.
    pub display_rank: Option<i64>,
    /// Clicked document.
    pub document_id: Option<String>,
    /// Event type, see [`event_type`].
    pub event_type: Option<String>,
    /// Result type, see [`result_type`].
    pub result_type: Option<String>,
}

/// Documents returned by a logged query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogQueryResponseResultDocuments {
    /// Documents.
    pub results: Option<Vec<LogQueryResponseResultDocumentsResult>>,
    /// Number of documents.
    pub count: Option<i64>,
}

/// A document returned by a logged query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogQueryResponseResultDocumentsResult {
    /// Result position.
    pub position: Option<i64>,
    /// Document ID.
    pub document_id: Option<String>,
    /// Relevance score.
    pub score: Option<f64>,
    /// Confidence.
    pub confidence: Option<f64>,
    /// Collection ID.
    pub collection_id: Option<String>,
}

/// Response of the time series metrics operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricResponse {
    /// Aggregations.
    pub aggregations: Option<Vec<MetricAggregation>>,
}

/// A time series aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricAggregation {
    /// Bucket interval, e.g. `1d`.
    pub interval: Option<String>,
    /// Event type the aggregation counts.
    pub event_type: Option<String>,
    /// Buckets.
    pub results: Option<Vec<MetricAggregationResult>>,
}

/// A time series bucket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricAggregationResult {
    /// Bucket start.
    pub key_as_string: Option<DateTime<Utc>>,
    /// Bucket start in epoch milliseconds.
    pub key: Option<i64>,
    /// Queries in the bucket.
    pub matching_results: Option<i64>,
    /// Event rate in the bucket.
    pub event_rate: Option<f64>,
}

/// Response of get_metrics_query_token_event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricTokenResponse {
    /// Aggregations.
    pub aggregations: Option<Vec<MetricTokenAggregation>>,
}

/// A query token aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricTokenAggregation {
    /// Event type the aggregation counts.
    pub event_type: Option<String>,
    /// Tokens.
    pub results: Option<Vec<MetricTokenAggregationResult>>,
}

/// A query token and its event rate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricTokenAggregationResult {
    /// Token.
    pub key: Option<String>,
    /// Queries containing the token.
    pub matching_results: Option<i64>,
    /// Event rate.
    pub event_rate: Option<f64>,
}

/// Options for create_event.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateEventOptions {
    /// Event type, see [`event_type`].
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event data.
    pub data: EventData,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateEventOptions {
    /// Creates options recording an event.
    pub fn new(event_type: impl Into<String>, data: EventData) -> Self {
        Self {
            event_type: event_type.into(),
            data,
            headers: HashMap::new(),
        }
    }
}

/// Options for query_log.
#[derive(Debug, Clone, Default)]
pub struct QueryLogOptions {
    /// Filter in Discovery Query Language.
    pub filter: Option<String>,
    /// Query in Discovery Query Language.
    pub query: Option<String>,
    /// Number of entries.
    pub count: Option<i64>,
    /// Entries to skip.
    pub offset: Option<i64>,
    /// Sort fields.
    pub sort: Vec<String>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl QueryLogOptions {
    /// Creates options returning the most recent entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the number of entries.
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the sort fields.
    pub fn with_sort(mut self, sort: Vec<String>) -> Self {
        self.sort = sort;
        self
    }
}

/// Options of the time series metrics operations.
///
/// Used by get_metrics_query, get_metrics_query_event,
/// get_metrics_query_no_results and get_metrics_event_rate.
#[derive(Debug, Clone, Default)]
pub struct MetricsOptions {
    /// Start of the window.
    pub start_time: Option<DateTime<Utc>>,
    /// End of the window.
    pub end_time: Option<DateTime<Utc>>,
    /// Result type, see [`result_type`].
    pub result_type: Option<String>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl MetricsOptions {
    /// Creates options covering the default window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window.
    pub fn with_window(mut self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    /// Sets the result type.
    pub fn with_result_type(mut self, result_type: impl Into<String>) -> Self {
        self.result_type = Some(result_type.into());
        self
    }
}

/// Options for get_metrics_query.
pub type GetMetricsQueryOptions = MetricsOptions;
/// Options for get_metrics_query_event.
pub type GetMetricsQueryEventOptions = MetricsOptions;
/// Options for get_metrics_query_no_results.
pub type GetMetricsQueryNoResultsOptions = MetricsOptions;
/// Options for get_metrics_event_rate.
pub type GetMetricsEventRateOptions = MetricsOptions;

/// Options for get_metrics_query_token_event.
#[derive(Debug, Clone, Default)]
pub struct GetMetricsQueryTokenEventOptions {
    /// Number of tokens.
    pub count: Option<i64>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl GetMetricsQueryTokenEventOptions {
    /// Creates options with the default token count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of tokens.
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }
}

impl_with_header!(
    CreateEventOptions,
    QueryLogOptions,
    MetricsOptions,
    GetMetricsQueryTokenEventOptions,
);
