//! Queries service.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, require_list, DiscoveryResult};
use crate::transport::{DetailedResponse, Method, RequestBuilder};
use crate::types::queries::{
    Completions, FederatedQueryNoticesOptions, FederatedQueryOptions, GetAutocompletionOptions,
    NoticesParameters, QueryNoticesOptions, QueryNoticesResponse, QueryOptions, QueryResponse,
    LOGGING_OPT_OUT_HEADER,
};

/// Queries service trait.
#[async_trait]
pub trait QueriesService: Send + Sync {
    /// Queries a collection.
    async fn query(&self, options: &QueryOptions) -> DiscoveryResult<DetailedResponse<QueryResponse>>;

    /// Queries the ingestion notices of a collection.
    async fn query_notices(
        &self,
        options: &QueryNoticesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryNoticesResponse>>;

    /// Queries several collections of an environment.
    async fn federated_query(
        &self,
        options: &FederatedQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryResponse>>;

    /// Queries the ingestion notices of several collections.
    async fn federated_query_notices(
        &self,
        options: &FederatedQueryNoticesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryNoticesResponse>>;

    /// Returns completions for a query prefix.
    async fn get_autocompletion(
        &self,
        options: &GetAutocompletionOptions,
    ) -> DiscoveryResult<DetailedResponse<Completions>>;
}

/// Default implementation of the queries service.
pub struct DefaultQueriesService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultQueriesService<'a> {
    /// Creates a new queries service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }
}

fn logging_opt_out(request: RequestBuilder, opt_out: Option<bool>) -> RequestBuilder {
    match opt_out {
        Some(opt_out) => request.header(LOGGING_OPT_OUT_HEADER, opt_out.to_string()),
        None => request,
    }
}

fn notices_query(request: RequestBuilder, params: &NoticesParameters) -> RequestBuilder {
    request
        .query_opt("filter", params.filter.as_deref())
        .query_opt("query", params.query.as_deref())
        .query_opt("natural_language_query", params.natural_language_query.as_deref())
        .query_opt("aggregation", params.aggregation.as_deref())
        .query_opt("count", params.count)
        .query_list("return", &params.return_fields)
        .query_opt("offset", params.offset)
        .query_list("sort", &params.sort)
        .query_opt("highlight", params.highlight)
        .query_opt("deduplicate.field", params.deduplicate_field.as_deref())
        .query_opt("similar", params.similar)
        .query_list("similar.document_ids", &params.similar_document_ids)
        .query_list("similar.fields", &params.similar_fields)
}

#[async_trait]
impl<'a> QueriesService for DefaultQueriesService<'a> {
    async fn query(&self, options: &QueryOptions) -> DiscoveryResult<DetailedResponse<QueryResponse>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;

        let request = RequestBuilder::new(
            Method::Post,
            "/v1/environments/{environment_id}/collections/{collection_id}/query",
            "Query",
        )
        .path_param("environment_id", &options.environment_id)
        .path_param("collection_id", &options.collection_id)
        .accept_json();
        let request = logging_opt_out(request, options.logging_opt_out)
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn query_notices(
        &self,
        options: &QueryNoticesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryNoticesResponse>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;

        let request = RequestBuilder::new(
            Method::Get,
            "/v1/environments/{environment_id}/collections/{collection_id}/notices",
            "QueryNotices",
        )
        .path_param("environment_id", &options.environment_id)
        .path_param("collection_id", &options.collection_id);
        let request = notices_query(request, &options.parameters)
            .query_opt("passages", options.passages)
            .query_list("passages.fields", &options.passages_fields)
            .query_opt("passages.count", options.passages_count)
            .query_opt("passages.characters", options.passages_characters)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn federated_query(
        &self,
        options: &FederatedQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryResponse>> {
        require("environment_id", &options.environment_id)?;
        require_list("collection_ids", &options.collection_ids)?;

        let request = RequestBuilder::new(
            Method::Post,
            "/v1/environments/{environment_id}/query",
            "FederatedQuery",
        )
        .path_param("environment_id", &options.environment_id)
        .accept_json();
        let request = logging_opt_out(request, options.logging_opt_out)
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn federated_query_notices(
        &self,
        options: &FederatedQueryNoticesOptions,
    ) -> DiscoveryResult<DetailedResponse<QueryNoticesResponse>> {
        require("environment_id", &options.environment_id)?;
        require_list("collection_ids", &options.collection_ids)?;

        let request = RequestBuilder::new(
            Method::Get,
            "/v1/environments/{environment_id}/notices",
            "FederatedQueryNotices",
        )
        .path_param("environment_id", &options.environment_id)
        .query_list("collection_ids", &options.collection_ids);
        let request = notices_query(request, &options.parameters)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn get_autocompletion(
        &self,
        options: &GetAutocompletionOptions,
    ) -> DiscoveryResult<DetailedResponse<Completions>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;
        require("prefix", &options.prefix)?;

        let request = RequestBuilder::new(
            Method::Get,
            "/v1/environments/{environment_id}/collections/{collection_id}/autocompletion",
            "GetAutocompletion",
        )
        .path_param("environment_id", &options.environment_id)
        .path_param("collection_id", &options.collection_id)
        .query("prefix", &options.prefix)
        .query_opt("field", options.field.as_deref())
        .query_opt("count", options.count)
        .accept_json()
        .headers(&options.headers);
        self.executor.invoke(request).await
    }
}
