//! Environment types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Environment sizes. `LT` is the free Lite plan.
pub mod environment_size {
    /// Lite.
    pub const LT: &str = "LT";
    /// Extra small.
    pub const XS: &str = "XS";
    /// Small.
    pub const S: &str = "S";
    /// Medium-small.
    pub const MS: &str = "MS";
    /// Medium.
    pub const M: &str = "M";
    /// Medium-large.
    pub const ML: &str = "ML";
    /// Large.
    pub const L: &str = "L";
    /// Extra large.
    pub const XL: &str = "XL";
    /// 2x large.
    pub const XXL: &str = "XXL";
    /// 3x large.
    pub const XXXL: &str = "XXXL";
}

/// Environment statuses.
pub mod environment_status {
    /// Ready for use.
    pub const ACTIVE: &str = "active";
    /// Being created.
    pub const PENDING: &str = "pending";
    /// Being resized.
    pub const RESIZING: &str = "resizing";
    /// Failed.
    pub const FAULTED: &str = "faulted";
}

/// A Discovery environment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Environment {
    /// Unique identifier.
    pub environment_id: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated: Option<DateTime<Utc>>,
    /// Current status, see [`environment_status`].
    pub status: Option<String>,
    /// True for the read-only news environment.
    pub read_only: Option<bool>,
    /// Current size, see [`environment_size`].
    pub size: Option<String>,
    /// Size requested by an in-progress resize.
    pub requested_size: Option<String>,
    /// Capacity details.
    pub index_capacity: Option<IndexCapacity>,
    /// Relevancy training status.
    pub search_status: Option<SearchStatus>,
}

/// Resource limits of an environment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexCapacity {
    /// Document counts.
    pub documents: Option<EnvironmentDocuments>,
    /// Disk usage.
    pub disk_usage: Option<DiskUsage>,
    /// Collection counts.
    pub collections: Option<CollectionUsage>,
}

/// Document limits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentDocuments {
    /// Documents currently indexed.
    pub available: Option<i64>,
    /// Maximum documents allowed.
    pub maximum_allowed: Option<i64>,
}

/// Disk limits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiskUsage {
    /// Bytes used.
    pub used_bytes: Option<i64>,
    /// Bytes allowed.
    pub maximum_allowed_bytes: Option<i64>,
}

/// Collection limits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionUsage {
    /// Collections in use.
    pub available: Option<i64>,
    /// Maximum collections allowed.
    pub maximum_allowed: Option<i64>,
}

/// Relevancy training status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchStatus {
    /// Training scope.
    pub scope: Option<String>,
    /// `NO_DATA`, `INSUFFICENT_DATA`, `TRAINING`, `TRAINED` or `NOT_APPLICABLE`.
    pub status: Option<String>,
    /// Status description.
    pub status_description: Option<String>,
    /// Date of the last training run.
    pub last_trained: Option<NaiveDate>,
}

/// Response of list_environments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListEnvironmentsResponse {
    /// Environments.
    pub environments: Option<Vec<Environment>>,
}

/// Response of delete_environment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteEnvironmentResponse {
    /// Deleted environment.
    pub environment_id: Option<String>,
    /// `deleted`.
    pub status: Option<String>,
}

/// A field found in one or more collections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Field {
    /// Field path.
    pub field: Option<String>,
    /// Field type, e.g. `nested`, `string`, `date`, `long`.
    #[serde(rename = "type")]
    pub field_type: Option<String>,
}

/// Response of list_fields and list_collection_fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListCollectionFieldsResponse {
    /// Fields.
    pub fields: Option<Vec<Field>>,
}

/// Options for create_environment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateEnvironmentOptions {
    /// Name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Size, see [`environment_size`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateEnvironmentOptions {
    /// Creates options for a new environment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// Options for list_environments.
#[derive(Debug, Clone, Default)]
pub struct ListEnvironmentsOptions {
    /// Exact name filter.
    pub name: Option<String>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl ListEnvironmentsOptions {
    /// Creates options listing every environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by exact name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Options for get_environment.
#[derive(Debug, Clone, Default)]
pub struct GetEnvironmentOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl GetEnvironmentOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }
}

/// Options for update_environment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEnvironmentOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New size; environments can only grow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateEnvironmentOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// Options for delete_environment.
#[derive(Debug, Clone, Default)]
pub struct DeleteEnvironmentOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl DeleteEnvironmentOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }
}

/// Options for list_fields.
#[derive(Debug, Clone, Default)]
pub struct ListFieldsOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collections to inspect.
    pub collection_ids: Vec<String>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl ListFieldsOptions {
    /// Creates options for fields across the given collections.
    pub fn new(environment_id: impl Into<String>, collection_ids: Vec<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_ids,
            ..Default::default()
        }
    }
}

impl_with_header!(
    CreateEnvironmentOptions,
    ListEnvironmentsOptions,
    GetEnvironmentOptions,
    UpdateEnvironmentOptions,
    DeleteEnvironmentOptions,
    ListFieldsOptions,
);
