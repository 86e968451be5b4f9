//! Events, query log and metrics service.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, require_opt, DiscoveryResult};
use crate::transport::{DetailedResponse, Method, RequestBuilder};
use crate::types::events::{
    format_timestamp, CreateEventOptions, CreateEventResponse, GetMetricsQueryTokenEventOptions,
    LogQueryResponse, MetricResponse, MetricTokenResponse, MetricsOptions, QueryLogOptions,
};

/// Events and metrics service trait.
#[async_trait]
pub trait EventsService: Send + Sync {
    /// Records an event, such as a click on a query result.
    async fn create_event(
        &self,
        options: &CreateEventOptions,
    ) -> DiscoveryResult<DetailedResponse<CreateEventResponse>>;

    /// Searches the query and event log.
    async fn query_log(&self, options: &QueryLogOptions) -> DiscoveryResult<DetailedResponse<LogQueryResponse>>;

    /// Number of queries over time.
    async fn get_metrics_query(
        &self,
        options: &MetricsOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricResponse>>;

    /// Number of queries with at least one event over time.
    async fn get_metrics_query_event(
        &self,
        options: &MetricsOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricResponse>>;

    /// Number of queries without results over time.
    async fn get_metrics_query_no_results(
        &self,
        options: &MetricsOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricResponse>>;

    /// Fraction of queries with an event over time.
    async fn get_metrics_event_rate(
        &self,
        options: &MetricsOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricResponse>>;

    /// Most frequent query tokens with their event rate.
    async fn get_metrics_query_token_event(
        &self,
        options: &GetMetricsQueryTokenEventOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricTokenResponse>>;
}

/// Default implementation of the events service.
pub struct DefaultEventsService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultEventsService<'a> {
    /// Creates a new events service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    async fn metrics(
        &self,
        path: &'static str,
        operation_id: &'static str,
        options: &MetricsOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricResponse>> {
        let request = RequestBuilder::new(Method::Get, path, operation_id)
            .query_opt("start_time", options.start_time.as_ref().map(format_timestamp))
            .query_opt("end_time", options.end_time.as_ref().map(format_timestamp))
            .query_opt("result_type", options.result_type.as_deref())
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }
}

#[async_trait]
impl<'a> EventsService for DefaultEventsService<'a> {
    async fn create_event(
        &self,
        options: &CreateEventOptions,
    ) -> DiscoveryResult<DetailedResponse<CreateEventResponse>> {
        require("type", &options.event_type)?;
        let data = &options.data;
        require_opt("data.environment_id", data.environment_id.as_deref())?;
        require_opt("data.session_token", data.session_token.as_deref())?;
        require_opt("data.collection_id", data.collection_id.as_deref())?;
        require_opt("data.document_id", data.document_id.as_deref())?;

        let request = RequestBuilder::new(Method::Post, "/v1/events", "CreateEvent")
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn query_log(&self, options: &QueryLogOptions) -> DiscoveryResult<DetailedResponse<LogQueryResponse>> {
        let request = RequestBuilder::new(Method::Get, "/v1/logs", "QueryLog")
            .query_opt("filter", options.filter.as_deref())
            .query_opt("query", options.query.as_deref())
            .query_opt("count", options.count)
            .query_opt("offset", options.offset)
            .query_list("sort", &options.sort)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn get_metrics_query(
        &self,
        options: &MetricsOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricResponse>> {
        self.metrics("/v1/metrics/number_of_queries", "GetMetricsQuery", options)
            .await
    }

    async fn get_metrics_query_event(
        &self,
        options: &MetricsOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricResponse>> {
        self.metrics(
            "/v1/metrics/number_of_queries_with_event",
            "GetMetricsQueryEvent",
            options,
        )
        .await
    }

    async fn get_metrics_query_no_results(
        &self,
        options: &MetricsOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricResponse>> {
        self.metrics(
            "/v1/metrics/number_of_queries_with_no_search_results",
            "GetMetricsQueryNoResults",
            options,
        )
        .await
    }

    async fn get_metrics_event_rate(
        &self,
        options: &MetricsOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricResponse>> {
        self.metrics("/v1/metrics/event_rate", "GetMetricsEventRate", options)
            .await
    }

    async fn get_metrics_query_token_event(
        &self,
        options: &GetMetricsQueryTokenEventOptions,
    ) -> DiscoveryResult<DetailedResponse<MetricTokenResponse>> {
        let request = RequestBuilder::new(
            Method::Get,
            "/v1/metrics/top_query_tokens_with_event_rate",
            "GetMetricsQueryTokenEvent",
        )
        .query_opt("count", options.count)
        .accept_json()
        .headers(&options.headers);
        self.executor.invoke(request).await
    }
}
