//! Gateways service.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, DiscoveryResult};
use crate::transport::{DetailedResponse, Method, RequestBuilder};
use crate::types::gateways::{
    CreateGatewayOptions, Gateway, GatewayDelete, GatewayList, GatewayOptions, ListGatewaysOptions,
};

const GATEWAYS_PATH: &str = "/v1/environments/{environment_id}/gateways";
const GATEWAY_PATH: &str = "/v1/environments/{environment_id}/gateways/{gateway_id}";

/// Gateways service trait.
#[async_trait]
pub trait GatewaysService: Send + Sync {
    /// Lists the gateways of an environment.
    async fn list_gateways(&self, options: &ListGatewaysOptions) -> DiscoveryResult<DetailedResponse<GatewayList>>;

    /// Creates a gateway.
    async fn create_gateway(&self, options: &CreateGatewayOptions) -> DiscoveryResult<DetailedResponse<Gateway>>;

    /// Retrieves a gateway.
    async fn get_gateway(&self, options: &GatewayOptions) -> DiscoveryResult<DetailedResponse<Gateway>>;

    /// Deletes a gateway.
    async fn delete_gateway(&self, options: &GatewayOptions) -> DiscoveryResult<DetailedResponse<GatewayDelete>>;
}

/// Default implementation of the gateways service.
pub struct DefaultGatewaysService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultGatewaysService<'a> {
    /// Creates a new gateways service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<'a> GatewaysService for DefaultGatewaysService<'a> {
    async fn list_gateways(&self, options: &ListGatewaysOptions) -> DiscoveryResult<DetailedResponse<GatewayList>> {
        require("environment_id", &options.environment_id)?;

        let request = RequestBuilder::new(Method::Get, GATEWAYS_PATH, "ListGateways")
            .path_param("environment_id", &options.environment_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn create_gateway(&self, options: &CreateGatewayOptions) -> DiscoveryResult<DetailedResponse<Gateway>> {
        require("environment_id", &options.environment_id)?;

        let request = RequestBuilder::new(Method::Post, GATEWAYS_PATH, "CreateGateway")
            .path_param("environment_id", &options.environment_id)
            .accept_json()
            .headers(&options.headers)
            .json(options)?;
        self.executor.invoke(request).await
    }

    async fn get_gateway(&self, options: &GatewayOptions) -> DiscoveryResult<DetailedResponse<Gateway>> {
        require("environment_id", &options.environment_id)?;
        require("gateway_id", &options.gateway_id)?;

        let request = RequestBuilder::new(Method::Get, GATEWAY_PATH, "GetGateway")
            .path_param("environment_id", &options.environment_id)
            .path_param("gateway_id", &options.gateway_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn delete_gateway(&self, options: &GatewayOptions) -> DiscoveryResult<DetailedResponse<GatewayDelete>> {
        require("environment_id", &options.environment_id)?;
        require("gateway_id", &options.gateway_id)?;

        let request = RequestBuilder::new(Method::Delete, GATEWAY_PATH, "DeleteGateway")
            .path_param("environment_id", &options.environment_id)
            .path_param("gateway_id", &options.gateway_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }
}
