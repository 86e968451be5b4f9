//! Gateway types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Gateway statuses.
pub mod gateway_status {
    /// The gateway is connected.
    pub const CONNECTED: &str = "connected";
    /// The gateway is not connected.
    pub const IDLE: &str = "idle";
}

/// A gateway to on-premises sources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gateway {
    /// Gateway ID.
    pub gateway_id: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Status, see [`gateway_status`].
    pub status: Option<String>,
    /// Token used to install the gateway.
    pub token: Option<String>,
    /// ID of the token.
    pub token_id: Option<String>,
}

/// Response of list_gateways.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GatewayList {
    /// Gateways.
    pub gateways: Option<Vec<Gateway>>,
}

/// Response of delete_gateway.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GatewayDelete {
    /// Deleted gateway.
    pub gateway_id: Option<String>,
    /// `deleted`.
    pub status: Option<String>,
}

/// Options for list_gateways.
#[derive(Debug, Clone, Default)]
pub struct ListGatewaysOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl ListGatewaysOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }
}

/// Options for create_gateway.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGatewayOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Gateway name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateGatewayOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }

    /// Sets the gateway name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Options naming a gateway.
///
/// Used by get_gateway and delete_gateway.
#[derive(Debug, Clone, Default)]
pub struct GatewayOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Gateway ID.
    pub gateway_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl GatewayOptions {
    /// Creates options for the given gateway.
    pub fn new(environment_id: impl Into<String>, gateway_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            gateway_id: gateway_id.into(),
            ..Default::default()
        }
    }
}

/// Options for get_gateway.
pub type GetGatewayOptions = GatewayOptions;
/// Options for delete_gateway.
pub type DeleteGatewayOptions = GatewayOptions;

impl_with_header!(ListGatewaysOptions, CreateGatewayOptions, GatewayOptions);
