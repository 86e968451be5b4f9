//! Source credentials service.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, DiscoveryResult};
use crate::transport::{DetailedResponse, Method, RequestBuilder};
use crate::types::credentials::{
    CreateCredentialsOptions, CredentialOptions, Credentials, CredentialsList, DeleteCredentials,
    ListCredentialsOptions, UpdateCredentialsOptions,
};

const CREDENTIALS_PATH: &str = "/v1/environments/{environment_id}/credentials";
const CREDENTIAL_PATH: &str = "/v1/environments/{environment_id}/credentials/{credential_id}";

/// Source credentials service trait.
#[async_trait]
pub trait CredentialsService: Send + Sync {
    /// Lists the source credentials of an environment.
    async fn list_credentials(
        &self,
        options: &ListCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<CredentialsList>>;

    /// Stores credentials for a source.
    async fn create_credentials(
        &self,
        options: &CreateCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<Credentials>>;

    /// Retrieves a credential. Secret fields are not returned.
    async fn get_credentials(
        &self,
        options: &CredentialOptions,
    ) -> DiscoveryResult<DetailedResponse<Credentials>>;

    /// Replaces a credential.
    async fn update_credentials(
        &self,
        options: &UpdateCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<Credentials>>;

    /// Deletes a credential.
    async fn delete_credentials(
        &self,
        options: &CredentialOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteCredentials>>;
}

/// Default implementation of the credentials service.
pub struct DefaultCredentialsService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultCredentialsService<'a> {
    /// Creates a new credentials service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<'a> CredentialsService for DefaultCredentialsService<'a> {
    async fn list_credentials(
        &self,
        options: &ListCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<CredentialsList>> {
        require("environment_id", &options.environment_id)?;

        let request = RequestBuilder::new(Method::Get, CREDENTIALS_PATH, "ListCredentials")
            .path_param("environment_id", &options.environment_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn create_credentials(
        &self,
        options: &CreateCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<Credentials>> {
        require("environment_id", &options.environment_id)?;

        let request = RequestBuilder::new(Method::Post, CREDENTIALS_PATH, "CreateCredentials")
            .path_param("environment_id", &options.environment_id)
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn get_credentials(
        &self,
        options: &CredentialOptions,
    ) -> DiscoveryResult<DetailedResponse<Credentials>> {
        require("environment_id", &options.environment_id)?;
        require("credential_id", &options.credential_id)?;

        let request = RequestBuilder::new(Method::Get, CREDENTIAL_PATH, "GetCredentials")
            .path_param("environment_id", &options.environment_id)
            .path_param("credential_id", &options.credential_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn update_credentials(
        &self,
        options: &UpdateCredentialsOptions,
    ) -> DiscoveryResult<DetailedResponse<Credentials>> {
        require("environment_id", &options.environment_id)?;
        require("credential_id", &options.credential_id)?;

        let request = RequestBuilder::new(Method::Put, CREDENTIAL_PATH, "UpdateCredentials")
            .path_param("environment_id", &options.environment_id)
            .path_param("credential_id", &options.credential_id)
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn delete_credentials(
        &self,
        options: &CredentialOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteCredentials>> {
        require("environment_id", &options.environment_id)?;
        require("credential_id", &options.credential_id)?;

        let request = RequestBuilder::new(Method::Delete, CREDENTIAL_PATH, "DeleteCredentials")
            .path_param("environment_id", &options.environment_id)
            .path_param("credential_id", &options.credential_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }
}
