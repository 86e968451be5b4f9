//! Collections service, including expansions and word lists.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, require_list, DiscoveryResult};
use crate::transport::{DetailedResponse, Method, MultipartBody, RequestBuilder};
use crate::types::collections::{
    Collection, CollectionOptions, CreateCollectionOptions, CreateExpansionsOptions,
    CreateStopwordListOptions, CreateTokenizationDictionaryOptions, DeleteCollectionResponse,
    Expansions, ListCollectionsOptions, ListCollectionsResponse, TokenDictStatusResponse,
    UpdateCollectionOptions,
};
use crate::types::environments::ListCollectionFieldsResponse;

const COLLECTIONS_PATH: &str = "/v1/environments/{environment_id}/collections";
const COLLECTION_PATH: &str = "/v1/environments/{environment_id}/collections/{collection_id}";
const FIELDS_PATH: &str = "/v1/environments/{environment_id}/collections/{collection_id}/fields";
const EXPANSIONS_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/expansions";
const TOKENIZATION_DICTIONARY_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/word_lists/tokenization_dictionary";
const STOPWORDS_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/word_lists/stopwords";

/// Collections service trait.
#[async_trait]
pub trait CollectionsService: Send + Sync {
    /// Creates a collection.
    async fn create_collection(
        &self,
        options: &CreateCollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>>;

    /// Lists the collections of an environment.
    async fn list_collections(
        &self,
        options: &ListCollectionsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionsResponse>>;

    /// Retrieves a collection.
    async fn get_collection(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>>;

    /// Updates a collection.
    async fn update_collection(
        &self,
        options: &UpdateCollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>>;

    /// Deletes a collection.
    async fn delete_collection(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteCollectionResponse>>;

    /// Lists the fields of a collection.
    async fn list_collection_fields(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionFieldsResponse>>;

    /// Lists the query expansions of a collection.
    async fn list_expansions(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Expansions>>;

    /// Replaces the query expansions of a collection.
    async fn create_expansions(
        &self,
        options: &CreateExpansionsOptions,
    ) -> DiscoveryResult<DetailedResponse<Expansions>>;

    /// Removes the query expansions of a collection.
    async fn delete_expansions(&self, options: &CollectionOptions) -> DiscoveryResult<DetailedResponse<()>>;

    /// Returns the tokenization dictionary status.
    async fn get_tokenization_dictionary_status(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<TokenDictStatusResponse>>;

    /// Creates a tokenization dictionary.
    async fn create_tokenization_dictionary(
        &self,
        options: &CreateTokenizationDictionaryOptions,
    ) -> DiscoveryResult<DetailedResponse<TokenDictStatusResponse>>;

    /// Deletes the tokenization dictionary.
    async fn delete_tokenization_dictionary(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<()>>;

    /// Returns the custom stopword list status.
    async fn get_stopword_list_status(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<TokenDictStatusResponse>>;

    /// Uploads a custom stopword list.
    async fn create_stopword_list(
        &self,
        options: &CreateStopwordListOptions,
    ) -> DiscoveryResult<DetailedResponse<TokenDictStatusResponse>>;

    /// Deletes the custom stopword list.
    async fn delete_stopword_list(&self, options: &CollectionOptions) -> DiscoveryResult<DetailedResponse<()>>;
}

/// Default implementation of the collections service.
pub struct DefaultCollectionsService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultCollectionsService<'a> {
    /// Creates a new collections service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }
}

/// Validates the IDs and binds them on a collection-scoped request.
fn collection_request(
    method: Method,
    path: &'static str,
    operation_id: &'static str,
    options: &CollectionOptions,
) -> DiscoveryResult<RequestBuilder> {
    require("environment_id", &options.environment_id)?;
    require("collection_id", &options.collection_id)?;

    Ok(RequestBuilder::new(method, path, operation_id)
        .path_param("environment_id", &options.environment_id)
        .path_param("collection_id", &options.collection_id)
        .accept_json()
        .headers(&options.headers))
}

#[async_trait]
impl<'a> CollectionsService for DefaultCollectionsService<'a> {
    async fn create_collection(
        &self,
        options: &CreateCollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>> {
        require("environment_id", &options.environment_id)?;
        require("name", &options.name)?;

        let request = RequestBuilder::new(Method::Post, COLLECTIONS_PATH, "CreateCollection")
            .path_param("environment_id", &options.environment_id)
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn list_collections(
        &self,
        options: &ListCollectionsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionsResponse>> {
        require("environment_id", &options.environment_id)?;

        let request = RequestBuilder::new(Method::Get, COLLECTIONS_PATH, "ListCollections")
            .path_param("environment_id", &options.environment_id)
            .query_opt("name", options.name.as_deref())
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn get_collection(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>> {
        let request = collection_request(Method::Get, COLLECTION_PATH, "GetCollection", options)?;
        self.executor.invoke(request).await
    }

    async fn update_collection(
        &self,
        options: &UpdateCollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Collection>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;
        require("name", &options.name)?;

        let request = RequestBuilder::new(Method::Put, COLLECTION_PATH, "UpdateCollection")
            .path_param("environment_id", &options.environment_id)
            .path_param("collection_id", &options.collection_id)
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn delete_collection(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteCollectionResponse>> {
        let request = collection_request(Method::Delete, COLLECTION_PATH, "DeleteCollection", options)?;
        self.executor.invoke(request).await
    }

    async fn list_collection_fields(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<ListCollectionFieldsResponse>> {
        let request = collection_request(Method::Get, FIELDS_PATH, "ListCollectionFields", options)?;
        self.executor.invoke(request).await
    }

    async fn list_expansions(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<Expansions>> {
        let request = collection_request(Method::Get, EXPANSIONS_PATH, "ListExpansions", options)?;
        self.executor.invoke(request).await
    }

    async fn create_expansions(
        &self,
        options: &CreateExpansionsOptions,
    ) -> DiscoveryResult<DetailedResponse<Expansions>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;
        require_list("expansions", &options.expansions)?;
        for expansion in &options.expansions {
            require_list("expansions.expanded_terms", &expansion.expanded_terms)?;
        }

        let request = RequestBuilder::new(Method::Post, EXPANSIONS_PATH, "CreateExpansions")
            .path_param("environment_id", &options.environment_id)
            .path_param("collection_id", &options.collection_id)
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn delete_expansions(&self, options: &CollectionOptions) -> DiscoveryResult<DetailedResponse<()>> {
        let request = collection_request(Method::Delete, EXPANSIONS_PATH, "DeleteExpansions", options)?;
        self.executor.invoke_empty(request).await
    }

    async fn get_tokenization_dictionary_status(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<TokenDictStatusResponse>> {
        let request = collection_request(
            Method::Get,
            TOKENIZATION_DICTIONARY_PATH,
            "GetTokenizationDictionaryStatus",
            options,
        )?;
        self.executor.invoke(request).await
    }

    async fn create_tokenization_dictionary(
        &self,
        options: &CreateTokenizationDictionaryOptions,
    ) -> DiscoveryResult<DetailedResponse<TokenDictStatusResponse>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;

        let request = RequestBuilder::new(
            Method::Post,
            TOKENIZATION_DICTIONARY_PATH,
            "CreateTokenizationDictionary",
        )
        .path_param("environment_id", &options.environment_id)
        .path_param("collection_id", &options.collection_id)
        .accept_json()
        .headers(&options.headers)
        .json(options)?;
        self.executor.invoke(request).await
    }

    async fn delete_tokenization_dictionary(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<()>> {
        let request = collection_request(
            Method::Delete,
            TOKENIZATION_DICTIONARY_PATH,
            "DeleteTokenizationDictionary",
            options,
        )?;
        self.executor.invoke_empty(request).await
    }

    async fn get_stopword_list_status(
        &self,
        options: &CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<TokenDictStatusResponse>> {
        let request = collection_request(Method::Get, STOPWORDS_PATH, "GetStopwordListStatus", options)?;
        self.executor.invoke(request).await
    }

    async fn create_stopword_list(
        &self,
        options: &CreateStopwordListOptions,
    ) -> DiscoveryResult<DetailedResponse<TokenDictStatusResponse>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;
        require("stopword_filename", &options.stopword_filename)?;
        require_list("stopword_file", &options.stopword_file[..])?;

        let form = MultipartBody::new().file(
            "stopword_file",
            options.stopword_file.clone(),
            Some(options.stopword_filename.clone()),
            Some("application/octet-stream".to_string()),
        );
        let request = RequestBuilder::new(Method::Post, STOPWORDS_PATH, "CreateStopwordList")
            .path_param("environment_id", &options.environment_id)
            .path_param("collection_id", &options.collection_id)
            .accept_json()
            .headers(&options.headers)
            .multipart(form);
        self.executor.invoke(request).await
    }

    async fn delete_stopword_list(&self, options: &CollectionOptions) -> DiscoveryResult<DetailedResponse<()>> {
        let request = collection_request(Method::Delete, STOPWORDS_PATH, "DeleteStopwordList", options)?;
        self.executor.invoke_empty(request).await
    }
}
