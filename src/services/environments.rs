//! Environments service.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, require_list, DiscoveryResult};
use crate::transport::{DetailedResponse, Method, RequestBuilder};
use crate::types::environments::{
    CreateEnvironmentOptions, DeleteEnvironmentOptions, DeleteEnvironmentResponse, Environment,
    GetEnvironmentOptions, ListCollectionFieldsResponse, ListEnvironmentsOptions,
    ListEnvironmentsResponse, ListFieldsOptions, UpdateEnvironmentOptions,
};

/// Environments service trait.
#[async_trait]
pub trait EnvironmentsService: Send + Sync {
    /// Creates an environment. Only one environment per instance is allowed.
    async fn create_environment(
        &self,
        options: &CreateEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>>;

    /// Lists environments.
    async fn list_environments(
        &self,
        options: &ListEnvironmentsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListEnvironmentsResponse>>;

    /// Retrieves an environment.
    async fn get_environment(
        &self,
        options: &GetEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>>;

    /// Updates an environment's name, description or size.
    async fn update_environment(
        &self,
        options: &UpdateEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>>;

    /// Deletes an environment.
    async fn delete_environment(
        &self,
        options: &DeleteEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteEnvironmentResponse>>;

    /// Lists the fields of several collections.
    async fn list_fields(
        &self,
        options: &ListFieldsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionFieldsResponse>>;
}

/// Default implementation of the environments service.
pub struct DefaultEnvironmentsService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultEnvironmentsService<'a> {
    /// Creates a new environments service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<'a> EnvironmentsService for DefaultEnvironmentsService<'a> {
    async fn create_environment(
        &self,
        options: &CreateEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>> {
        require("name", &options.name)?;

        let request = RequestBuilder::new(Method::Post, "/v1/environments", "CreateEnvironment")
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn list_environments(
        &self,
        options: &ListEnvironmentsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListEnvironmentsResponse>> {
        let request = RequestBuilder::new(Method::Get, "/v1/environments", "ListEnvironments")
            .query_opt("name", options.name.as_deref())
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn get_environment(
        &self,
        options: &GetEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>> {
        require("environment_id", &options.environment_id)?;

        let request = RequestBuilder::new(
            Method::Get,
            "/v1/environments/{environment_id}",
            "GetEnvironment",
        )
        .path_param("environment_id", &options.environment_id)
        .accept_json()
        .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn update_environment(
        &self,
        options: &UpdateEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<Environment>> {
        require("environment_id", &options.environment_id)?;

        let request = RequestBuilder::new(
            Method::Put,
            "/v1/environments/{environment_id}",
            "UpdateEnvironment",
        )
        .path_param("environment_id", &options.environment_id)
        .accept_json()
        .headers(&options.headers)
        .json(options)?;
        self.executor.invoke(request).await
    }

    async fn delete_environment(
        &self,
        options: &DeleteEnvironmentOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteEnvironmentResponse>> {
        require("environment_id", &options.environment_id)?;

        let request = RequestBuilder::new(
            Method::Delete,
            "/v1/environments/{environment_id}",
            "DeleteEnvironment",
        )
        .path_param("environment_id", &options.environment_id)
        .accept_json()
        .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn list_fields(
        &self,
        options: &ListFieldsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionFieldsResponse>> {
        require("environment_id", &options.environment_id)?;
        require_list("collection_ids", &options.collection_ids)?;

        let request = RequestBuilder::new(
            Method::Get,
            "/v1/environments/{environment_id}/fields",
            "ListFields",
        )
        .path_param("environment_id", &options.environment_id)
        .query_list("collection_ids", &options.collection_ids)
        .accept_json()
        .headers(&options.headers);
        self.executor.invoke(request).await
    }
}
