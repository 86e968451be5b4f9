//! Training data service.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, DiscoveryResult};
use crate::transport::{DetailedResponse, Method, RequestBuilder};
use crate::types::training_data::{
    AddTrainingDataOptions, CreateTrainingExampleOptions, TrainingDataOptions, TrainingDataSet,
    TrainingExample, TrainingExampleList, TrainingExampleOptions, TrainingQuery,
    TrainingQueryOptions, UpdateTrainingExampleOptions,
};

const TRAINING_DATA_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/training_data";
const TRAINING_QUERY_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/training_data/{query_id}";
const EXAMPLES_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/training_data/{query_id}/examples";
const EXAMPLE_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/training_data/{query_id}/examples/{example_id}";

/// Training data service trait.
#[async_trait]
pub trait TrainingDataService: Send + Sync {
    /// Lists the training queries of a collection.
    async fn list_training_data(
        &self,
        options: &TrainingDataOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingDataSet>>;

    /// Adds a training query.
    async fn add_training_data(
        &self,
        options: &AddTrainingDataOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingQuery>>;

    /// Deletes every training query of a collection.
    async fn delete_all_training_data(
        &self,
        options: &TrainingDataOptions,
    ) -> DiscoveryResult<DetailedResponse<()>>;

    /// Retrieves a training query.
    async fn get_training_data(
        &self,
        options: &TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingQuery>>;

    /// Deletes a training query.
    async fn delete_training_data(
        &self,
        options: &TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<()>>;

    /// Lists the examples of a training query.
    async fn list_training_examples(
        &self,
        options: &TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExampleList>>;

    /// Adds an example to a training query.
    async fn create_training_example(
        &self,
        options: &CreateTrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>>;

    /// Deletes an example.
    async fn delete_training_example(
        &self,
        options: &TrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<()>>;

    /// Changes the label or cross reference of an example.
    async fn update_training_example(
        &self,
        options: &UpdateTrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>>;

    /// Retrieves an example.
    async fn get_training_example(
        &self,
        options: &TrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>>;
}

/// Default implementation of the training data service.
pub struct DefaultTrainingDataService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultTrainingDataService<'a> {
    /// Creates a new training data service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }
}

fn collection_scoped(
    method: Method,
    operation_id: &'static str,
    environment_id: &str,
    collection_id: &str,
) -> DiscoveryResult<RequestBuilder> {
    require("environment_id", environment_id)?;
    require("collection_id", collection_id)?;

    Ok(RequestBuilder::new(method, TRAINING_DATA_PATH, operation_id)
        .path_param("environment_id", environment_id)
        .path_param("collection_id", collection_id)
        .accept_json())
}

fn query_scoped(
    method: Method,
    path: &'static str,
    operation_id: &'static str,
    options: &TrainingQueryOptions,
) -> DiscoveryResult<RequestBuilder> {
    require("environment_id", &options.environment_id)?;
    require("collection_id", &options.collection_id)?;
    require("query_id", &options.query_id)?;

    Ok(RequestBuilder::new(method, path, operation_id)
        .path_param("environment_id", &options.environment_id)
        .path_param("collection_id", &options.collection_id)
        .path_param("query_id", &options.query_id)
        .accept_json()
        .headers(&options.headers))
}

fn example_scoped(
    method: Method,
    operation_id: &'static str,
    environment_id: &str,
    collection_id: &str,
    query_id: &str,
    example_id: &str,
) -> DiscoveryResult<RequestBuilder> {
    require("environment_id", environment_id)?;
    require("collection_id", collection_id)?;
    require("query_id", query_id)?;
    require("example_id", example_id)?;

    Ok(RequestBuilder::new(method, EXAMPLE_PATH, operation_id)
        .path_param("environment_id", environment_id)
        .path_param("collection_id", collection_id)
        .path_param("query_id", query_id)
        .path_param("example_id", example_id)
        .accept_json())
}

#[async_trait]
impl<'a> TrainingDataService for DefaultTrainingDataService<'a> {
    async fn list_training_data(
        &self,
        options: &TrainingDataOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingDataSet>> {
        let request = collection_scoped(
            Method::Get,
            "ListTrainingData",
            &options.environment_id,
            &options.collection_id,
        )?
        .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn add_training_data(
        &self,
        options: &AddTrainingDataOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingQuery>> {
        let request = collection_scoped(
            Method::Post,
            "AddTrainingData",
            &options.environment_id,
            &options.collection_id,
        )?
        .headers(&options.headers)
        .json(options)?;
        self.executor.invoke(request).await
    }

    async fn delete_all_training_data(
        &self,
        options: &TrainingDataOptions,
    ) -> DiscoveryResult<DetailedResponse<()>> {
        let request = collection_scoped(
            Method::Delete,
            "DeleteAllTrainingData",
            &options.environment_id,
            &options.collection_id,
        )?
        .headers(&options.headers);
        self.executor.invoke_empty(request).await
    }

    async fn get_training_data(
        &self,
        options: &TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingQuery>> {
        let request = query_scoped(Method::Get, TRAINING_QUERY_PATH, "GetTrainingData", options)?;
        self.executor.invoke(request).await
    }

    async fn delete_training_data(
        &self,
        options: &TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<()>> {
        let request = query_scoped(Method::Delete, TRAINING_QUERY_PATH, "DeleteTrainingData", options)?;
        self.executor.invoke_empty(request).await
    }

    async fn list_training_examples(
        &self,
        options: &TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExampleList>> {
        let request = query_scoped(Method::Get, EXAMPLES_PATH, "ListTrainingExamples", options)?;
        self.executor.invoke(request).await
    }

    async fn create_training_example(
        &self,
        options: &CreateTrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;
        require("query_id", &options.query_id)?;

        let request = RequestBuilder::new(Method::Post, EXAMPLES_PATH, "CreateTrainingExample")
            .path_param("environment_id", &options.environment_id)
            .path_param("collection_id", &options.collection_id)
            .path_param("query_id", &options.query_id)
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn delete_training_example(
        &self,
        options: &TrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<()>> {
        let request = example_scoped(
            Method::Delete,
            "DeleteTrainingExample",
            &options.environment_id,
            &options.collection_id,
            &options.query_id,
            &options.example_id,
        )?
        .headers(&options.headers);
        self.executor.invoke_empty(request).await
    }

    async fn update_training_example(
        &self,
        options: &UpdateTrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>> {
        let request = example_scoped(
            Method::Put,
            "UpdateTrainingExample",
            &options.environment_id,
            &options.collection_id,
            &options.query_id,
            &options.example_id,
        )?
        .headers(&options.headers)
        .json(options)?;
        self.executor.invoke(request).await
    }

    async fn get_training_example(
        &self,
        options: &TrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>> {
        let request = example_scoped(
            Method::Get,
            "GetTrainingExample",
            &options.environment_id,
            &options.collection_id,
            &options.query_id,
            &options.example_id,
        )?
        .headers(&options.headers);
        self.executor.invoke(request).await
    }
}
