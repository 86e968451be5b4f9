//! Configurations service.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, DiscoveryResult};
use crate::transport::{DetailedResponse, Method, RequestBuilder};
use crate::types::configurations::{
    Configuration, CreateConfigurationOptions, DeleteConfigurationOptions,
    DeleteConfigurationResponse, GetConfigurationOptions, ListConfigurationsOptions,
    ListConfigurationsResponse, UpdateConfigurationOptions,
};

const CONFIGURATIONS_PATH: &str = "/v1/environments/{environment_id}/configurations";
const CONFIGURATION_PATH: &str =
    "/v1/environments/{environment_id}/configurations/{configuration_id}";

/// Configurations service trait.
#[async_trait]
pub trait ConfigurationsService: Send + Sync {
    /// Creates a configuration.
    async fn create_configuration(
        &self,
        options: &CreateConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>>;

    /// Lists the configurations of an environment.
    async fn list_configurations(
        &self,
        options: &ListConfigurationsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListConfigurationsResponse>>;

    /// Retrieves a configuration.
    async fn get_configuration(
        &self,
        options: &GetConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>>;

    /// Replaces a configuration.
    async fn update_configuration(
        &self,
        options: &UpdateConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>>;

    /// Deletes a configuration. Collections using it keep a copy.
    async fn delete_configuration(
        &self,
        options: &DeleteConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteConfigurationResponse>>;
}

/// Default implementation of the configurations service.
pub struct DefaultConfigurationsService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultConfigurationsService<'a> {
    /// Creates a new configurations service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<'a> ConfigurationsService for DefaultConfigurationsService<'a> {
    async fn create_configuration(
        &self,
        options: &CreateConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>> {
        require("environment_id", &options.environment_id)?;
        require("name", &options.name)?;

        let request = RequestBuilder::new(Method::Post, CONFIGURATIONS_PATH, "CreateConfiguration")
            .path_param("environment_id", &options.environment_id)
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn list_configurations(
        &self,
        options: &ListConfigurationsOptions,
    ) -> DiscoveryResult<DetailedResponse<ListConfigurationsResponse>> {
        require("environment_id", &options.environment_id)?;

        let request = RequestBuilder::new(Method::Get, CONFIGURATIONS_PATH, "ListConfigurations")
            .path_param("environment_id", &options.environment_id)
            .query_opt("name", options.name.as_deref())
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn get_configuration(
        &self,
        options: &GetConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>> {
        require("environment_id", &options.environment_id)?;
        require("configuration_id", &options.configuration_id)?;

        let request = RequestBuilder::new(Method::Get, CONFIGURATION_PATH, "GetConfiguration")
            .path_param("environment_id", &options.environment_id)
            .path_param("configuration_id", &options.configuration_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn update_configuration(
        &self,
        options: &UpdateConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<Configuration>> {
        require("environment_id", &options.environment_id)?;
        require("configuration_id", &options.configuration_id)?;
        require("name", &options.name)?;

        let request = RequestBuilder::new(Method::Put, CONFIGURATION_PATH, "UpdateConfiguration")
            .path_param("environment_id", &options.environment_id)
            .path_param("configuration_id", &options.configuration_id)
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn delete_configuration(
        &self,
        options: &DeleteConfigurationOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteConfigurationResponse>> {
        require("environment_id", &options.environment_id)?;
        require("configuration_id", &options.configuration_id)?;

        let request = RequestBuilder::new(Method::Delete, CONFIGURATION_PATH, "DeleteConfiguration")
            .path_param("environment_id", &options.environment_id)
            .path_param("configuration_id", &options.configuration_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DiscoveryError, ValidationError};
    use crate::mocks::{mock_client, MockResponse, MockTransport};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_configuration() {
        let transport = Arc::new(MockTransport::new().with_response(MockResponse::json(
            201,
            serde_json::json!({"configuration_id": "ConfigurationID", "name": "Name"}),
        )));
        let client = mock_client(transport.clone()).unwrap();

        let options = CreateConfigurationOptions::new("env", "Name");
        let response = client.configurations().create_configuration(&options).await.unwrap();

        assert_eq!(
            response.result.unwrap().configuration_id.as_deref(),
            Some("ConfigurationID")
        );
        let request = transport.last_request().unwrap();
        assert_eq!(request.path(), "/v1/environments/env/configurations");
        assert_eq!(request.json_body().unwrap(), serde_json::json!({"name": "Name"}));
        assert_eq!(
            request.header("X-IBMCloud-SDK-Analytics"),
            Some("service_name=discovery;service_version=V1;operation_id=CreateConfiguration")
        );
    }

    #[tokio::test]
    async fn test_update_configuration_requires_name() {
        let transport = Arc::new(MockTransport::new());
        let client = mock_client(transport.clone()).unwrap();

        let error = client
            .configurations()
            .update_configuration(&UpdateConfigurationOptions::new("env", "cfg", ""))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            DiscoveryError::Validation(ValidationError::MissingField { field: "name" })
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_configuration_id_is_path_encoded() {
        let transport = Arc::new(
            MockTransport::new().with_response(MockResponse::json(200, serde_json::json!({}))),
        );
        let client = mock_client(transport.clone()).unwrap();

        client
            .configurations()
            .get_configuration(&GetConfigurationOptions::new("env", "a/b c"))
            .await
            .unwrap();

        assert_eq!(
            transport.last_request().unwrap().path(),
            "/v1/environments/env/configurations/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_delete_configuration_notices() {
        let transport = Arc::new(MockTransport::new().with_response(MockResponse::json(
            200,
            serde_json::json!({
                "configuration_id": "cfg",
                "status": "deleted",
                "notices": [{"notice_id": "configuration_in_use", "severity": "warning"}]
            }),
        )));
        let client = mock_client(transport.clone()).unwrap();

        let response = client
            .configurations()
            .delete_configuration(&DeleteConfigurationOptions::new("env", "cfg"))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result.status.as_deref(), Some("deleted"));
        assert_eq!(result.notices.unwrap()[0].notice_id.as_deref(), Some("configuration_in_use"));
        assert_eq!(transport.last_request().unwrap().method(), Method::Delete);
    }
}
