//! Types shared across resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A warning or error raised while ingesting documents or running a query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Notice {
    /// Notice identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_id: Option<String>,
    /// When the notice was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Document the notice refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Query the notice refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    /// `warning` or `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// Ingestion or training step that raised the notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Notice severities.
pub mod notice_severity {
    /// Warning.
    pub const WARNING: &str = "warning";
    /// Error.
    pub const ERROR: &str = "error";
}

/// Serializes a list as a single comma-separated string.
#[allow(clippy::ptr_arg)]
pub(crate) fn serialize_csv<S: Serializer>(values: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&values.join(","))
}
