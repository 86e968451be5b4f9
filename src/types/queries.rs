//! Query, notices and autocompletion types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::common::{serialize_csv, Notice};

/// Header that opts a query out of request logging.
pub const LOGGING_OPT_OUT_HEADER: &str = "X-Watson-Logging-Opt-Out";

/// Response of query and federated_query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Number of matching documents.
    pub matching_results: Option<i64>,
    /// Returned documents.
    pub results: Option<Vec<QueryResult>>,
    /// Aggregation results.
    pub aggregations: Option<Vec<QueryAggregation>>,
    /// Passages, when requested.
    pub passages: Option<Vec<QueryPassages>>,
    /// Duplicates removed by deduplication.
    pub duplicates_removed: Option<i64>,
    /// Token used to correlate events with this query.
    pub session_token: Option<String>,
    /// How the documents were retrieved.
    pub retrieval_details: Option<RetrievalDetails>,
    /// Spelling correction of the natural language query.
    pub suggested_query: Option<String>,
}

/// A document returned by a query.
///
/// Document fields other than the well-known ones are kept in `fields`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    /// Document ID.
    pub id: Option<String>,
    /// Document metadata.
    pub metadata: Option<HashMap<String, Value>>,
    /// Collection the document belongs to.
    pub collection_id: Option<String>,
    /// Scoring details.
    pub result_metadata: Option<QueryResultMetadata>,
    /// Remaining document fields.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// Scoring details of a query result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResultMetadata {
    /// Raw relevance score.
    pub score: Option<f64>,
    /// Confidence, for trained collections.
    pub confidence: Option<f64>,
}

/// A passage returned by a query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryPassages {
    /// Source document.
    pub document_id: Option<String>,
    /// Passage relevance.
    pub passage_score: Option<f64>,
    /// Passage text.
    pub passage_text: Option<String>,
    /// Start offset in the field.
    pub start_offset: Option<i64>,
    /// End offset in the field.
    pub end_offset: Option<i64>,
    /// Field the passage came from.
    pub field: Option<String>,
}

/// An aggregation result.
///
/// Aggregation kinds (`term`, `histogram`, `timeslice`, `nested`, `filter`,
/// `min`, `max`, `sum`, `average`, `unique_count`, `top_hits`) differ in their
/// extra fields, which are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryAggregation {
    /// Aggregation kind.
    #[serde(rename = "type")]
    pub aggregation_type: Option<String>,
    /// Buckets.
    pub results: Option<Vec<AggregationResult>>,
    /// Documents matched by the aggregation.
    pub matching_results: Option<i64>,
    /// Sub-aggregations.
    pub aggregations: Option<Vec<QueryAggregation>>,
    /// Kind-specific fields such as `field`, `value` or `hits`.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A bucket of an aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Bucket key, a string or a number.
    pub key: Option<Value>,
    /// Documents in the bucket.
    pub matching_results: Option<i64>,
    /// Sub-aggregations.
    pub aggregations: Option<Vec<QueryAggregation>>,
    /// Remaining bucket fields.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Retrieval details of a query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetrievalDetails {
    /// `untrained`, `relevancy_training` or `continuous_relevancy_training`.
    pub document_retrieval_strategy: Option<String>,
}

/// Response of query_notices and federated_query_notices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryNoticesResponse {
    /// Number of matching notices.
    pub matching_results: Option<i64>,
    /// Returned notices.
    pub results: Option<Vec<QueryNoticesResult>>,
    /// Aggregation results.
    pub aggregations: Option<Vec<QueryAggregation>>,
    /// Passages.
    pub passages: Option<Vec<QueryPassages>>,
    /// Duplicates removed.
    pub duplicates_removed: Option<i64>,
}

/// A notices query result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryNoticesResult {
    /// Document ID.
    pub id: Option<String>,
    /// Document metadata.
    pub metadata: Option<HashMap<String, Value>>,
    /// Collection ID.
    pub collection_id: Option<String>,
    /// Scoring details.
    pub result_metadata: Option<QueryResultMetadata>,
    /// HTTP status of the ingestion.
    pub code: Option<i64>,
    /// File name.
    pub filename: Option<String>,
    /// File type.
    pub file_type: Option<String>,
    /// SHA-1 of the file.
    pub sha1: Option<String>,
    /// Notices of the document.
    pub notices: Option<Vec<Notice>>,
    /// Remaining fields.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// Response of get_autocompletion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Completions {
    /// Suggested completions.
    pub completions: Option<Vec<String>>,
}

/// Query parameters shared by query and federated_query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryParameters {
    /// Filter in Discovery Query Language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Query in Discovery Query Language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Natural language query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_language_query: Option<String>,
    /// Return passages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passages: Option<bool>,
    /// Aggregation expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
    /// Number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Fields to return.
    #[serde(
        rename = "return",
        serialize_with = "serialize_csv",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub return_fields: Vec<String>,
    /// Number of results to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Sort fields, `-` prefixed for descending order.
    #[serde(serialize_with = "serialize_csv", skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
    /// Return highlights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    /// Fields passages are extracted from.
    #[serde(
        rename = "passages.fields",
        serialize_with = "serialize_csv",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub passages_fields: Vec<String>,
    /// Maximum passages.
    #[serde(rename = "passages.count", skip_serializing_if = "Option::is_none")]
    pub passages_count: Option<i64>,
    /// Approximate passage length.
    #[serde(rename = "passages.characters", skip_serializing_if = "Option::is_none")]
    pub passages_characters: Option<i64>,
    /// Remove duplicate results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduplicate: Option<bool>,
    /// Field used for deduplication.
    #[serde(rename = "deduplicate.field", skip_serializing_if = "Option::is_none")]
    pub deduplicate_field: Option<String>,
    /// Return similar documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<bool>,
    /// Documents used as the similarity reference.
    #[serde(
        rename = "similar.document_ids",
        serialize_with = "serialize_csv",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub similar_document_ids: Vec<String>,
    /// Fields compared for similarity.
    #[serde(
        rename = "similar.fields",
        serialize_with = "serialize_csv",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub similar_fields: Vec<String>,
    /// Field whose values bias the results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<String>,
    /// Return a spelling suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
}

/// Options for query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection ID.
    #[serde(skip)]
    pub collection_id: String,
    /// Query parameters.
    #[serde(flatten)]
    pub parameters: QueryParameters,
    /// Opt the query out of request logging.
    #[serde(skip)]
    pub logging_opt_out: Option<bool>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl QueryOptions {
    /// Creates options querying the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }

    /// Sets the query parameters.
    pub fn with_parameters(mut self, parameters: QueryParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Sets the logging opt-out flag.
    pub fn with_logging_opt_out(mut self, opt_out: bool) -> Self {
        self.logging_opt_out = Some(opt_out);
        self
    }
}

/// Options for federated_query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FederatedQueryOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Collections to query.
    #[serde(serialize_with = "serialize_csv")]
    pub collection_ids: Vec<String>,
    /// Query parameters.
    #[serde(flatten)]
    pub parameters: QueryParameters,
    /// Opt the query out of request logging.
    #[serde(skip)]
    pub logging_opt_out: Option<bool>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl FederatedQueryOptions {
    /// Creates options querying the given collections.
    pub fn new(environment_id: impl Into<String>, collection_ids: Vec<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_ids,
            ..Default::default()
        }
    }

    /// Sets the query parameters.
    pub fn with_parameters(mut self, parameters: QueryParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Sets the logging opt-out flag.
    pub fn with_logging_opt_out(mut self, opt_out: bool) -> Self {
        self.logging_opt_out = Some(opt_out);
        self
    }
}

/// Query string parameters shared by the notices operations.
#[derive(Debug, Clone, Default)]
pub struct NoticesParameters {
    /// Filter in Discovery Query Language.
    pub filter: Option<String>,
    /// Query in Discovery Query Language.
    pub query: Option<String>,
    /// Natural language query.
    pub natural_language_query: Option<String>,
    /// Aggregation expression.
    pub aggregation: Option<String>,
    /// Number of results.
    pub count: Option<i64>,
    /// Fields to return.
    pub return_fields: Vec<String>,
    /// Number of results to skip.
    pub offset: Option<i64>,
    /// Sort fields.
    pub sort: Vec<String>,
    /// Return highlights.
    pub highlight: Option<bool>,
    /// Field used for deduplication.
    pub deduplicate_field: Option<String>,
    /// Return similar documents.
    pub similar: Option<bool>,
    /// Similarity reference documents.
    pub similar_document_ids: Vec<String>,
    /// Fields compared for similarity.
    pub similar_fields: Vec<String>,
}

/// Options for query_notices.
#[derive(Debug, Clone, Default)]
pub struct QueryNoticesOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// Shared notices parameters.
    pub parameters: NoticesParameters,
    /// Return passages.
    pub passages: Option<bool>,
    /// Fields passages are extracted from.
    pub passages_fields: Vec<String>,
    /// Maximum passages.
    pub passages_count: Option<i64>,
    /// Approximate passage length.
    pub passages_characters: Option<i64>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl QueryNoticesOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }

    /// Sets the shared parameters.
    pub fn with_parameters(mut self, parameters: NoticesParameters) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Options for federated_query_notices.
#[derive(Debug, Clone, Default)]
pub struct FederatedQueryNoticesOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collections to query.
    pub collection_ids: Vec<String>,
    /// Shared notices parameters.
    pub parameters: NoticesParameters,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl FederatedQueryNoticesOptions {
    /// Creates options for the given collections.
    pub fn new(environment_id: impl Into<String>, collection_ids: Vec<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_ids,
            ..Default::default()
        }
    }

    /// Sets the shared parameters.
    pub fn with_parameters(mut self, parameters: NoticesParameters) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Options for get_autocompletion.
#[derive(Debug, Clone, Default)]
pub struct GetAutocompletionOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// Text to complete.
    pub prefix: String,
    /// Field used to build completions.
    pub field: Option<String>,
    /// Number of completions.
    pub count: Option<i64>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl GetAutocompletionOptions {
    /// Creates options completing `prefix`.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Sets the completion field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the number of completions.
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }
}

impl_with_header!(
    QueryOptions,
    FederatedQueryOptions,
    QueryNoticesOptions,
    FederatedQueryNoticesOptions,
    GetAutocompletionOptions,
);
