//! Configuration types.
//!
//! A configuration describes how documents are converted, enriched and
//! normalized on ingestion, and optionally which external source a
//! collection crawls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::Notice;

/// Source types a configuration can crawl.
pub mod source_type {
    /// Box.
    pub const BOX: &str = "box";
    /// Salesforce.
    pub const SALESFORCE: &str = "salesforce";
    /// Microsoft SharePoint Online.
    pub const SHAREPOINT: &str = "sharepoint";
    /// Web crawl.
    pub const WEB_CRAWL: &str = "web_crawl";
    /// IBM Cloud Object Storage.
    pub const CLOUD_OBJECT_STORAGE: &str = "cloud_object_storage";
}

/// Crawl schedule frequencies.
pub mod schedule_frequency {
    /// Every five minutes.
    pub const FIVE_MINUTES: &str = "five_minutes";
    /// Hourly.
    pub const HOURLY: &str = "hourly";
    /// Daily.
    pub const DAILY: &str = "daily";
    /// Weekly.
    pub const WEEKLY: &str = "weekly";
    /// Monthly.
    pub const MONTHLY: &str = "monthly";
}

/// Normalization operations.
pub mod normalization_operation {
    /// Copy a field.
    pub const COPY: &str = "copy";
    /// Move a field.
    pub const MOVE: &str = "move";
    /// Merge fields into an array.
    pub const MERGE: &str = "merge";
    /// Remove a field.
    pub const REMOVE: &str = "remove";
    /// Remove null fields.
    pub const REMOVE_NULLS: &str = "remove_nulls";
}

/// An ingestion configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Document conversion settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<Conversions>,
    /// Enrichment steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<Enrichment>>,
    /// Post-enrichment normalizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizations: Option<Vec<NormalizationOperation>>,
    /// External source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

/// Document conversion settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Conversions {
    /// PDF settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<PdfSettings>,
    /// Word settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<WordSettings>,
    /// HTML settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<HtmlSettings>,
    /// Segmentation settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<SegmentSettings>,
    /// Normalizations applied to JSON before enrichment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_normalizations: Option<Vec<NormalizationOperation>>,
    /// Run OCR on embedded images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_text_recognition: Option<bool>,
}

/// PDF conversion settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PdfSettings {
    /// Heading detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<PdfHeadingDetection>,
}

/// Font-based heading detection for PDFs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PdfHeadingDetection {
    /// Font rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Vec<FontSetting>>,
}

/// Font rule mapping a font to a heading level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FontSetting {
    /// Heading level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    /// Minimum font size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i64>,
    /// Maximum font size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i64>,
    /// Bold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    /// Italic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Font name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Word conversion settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordSettings {
    /// Heading detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<WordHeadingDetection>,
}

/// Heading detection for Word documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordHeadingDetection {
    /// Font rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Vec<FontSetting>>,
    /// Style rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<WordStyle>>,
}

/// Style rule mapping Word styles to a heading level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordStyle {
    /// Heading level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    /// Style names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

/// HTML conversion settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HtmlSettings {
    /// Tags removed with their content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_tags_completely: Option<Vec<String>>,
    /// Tags removed, content kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_tags_keep_content: Option<Vec<String>>,
    /// Content to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_content: Option<XPathPatterns>,
    /// Content to drop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_content: Option<XPathPatterns>,
    /// Attributes to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_tag_attributes: Option<Vec<String>>,
    /// Attributes to drop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_tag_attributes: Option<Vec<String>>,
}

/// XPath selectors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct XPathPatterns {
    /// XPaths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpaths: Option<Vec<String>>,
}

/// Document segmentation settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentSettings {
    /// Split documents into segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Heading tags that start a segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_tags: Option<Vec<String>>,
    /// Annotated fields that start a segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotated_fields: Option<Vec<String>>,
}

/// A field normalization step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizationOperation {
    /// Operation, see [`normalization_operation`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Source field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_field: Option<String>,
    /// Destination field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_field: Option<String>,
}

/// An enrichment step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Enrichment {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field receiving the enrichment output.
    pub destination_field: String,
    /// Field to enrich.
    pub source_field: String,
    /// Overwrite an existing destination field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Enrichment name, e.g. `natural_language_understanding`.
    pub enrichment: String,
    /// Keep ingesting when the enrichment fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_downstream_errors: Option<bool>,
    /// Enrichment options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EnrichmentOptions>,
}

/// Options of an enrichment step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnrichmentOptions {
    /// Natural Language Understanding features, passed through as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<serde_json::Value>,
    /// ISO 639-1 language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Custom model ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// An external document source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Source {
    /// Source type, see [`source_type`].
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Credentials used to crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    /// Crawl schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<SourceSchedule>,
    /// What to crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SourceOptions>,
}

/// Crawl schedule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceSchedule {
    /// Whether scheduled crawls run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// IANA time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Frequency, see [`schedule_frequency`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// Objects to crawl; which lists apply depends on the source type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceOptions {
    /// Box folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<SourceOptionsFolder>>,
    /// Salesforce objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<SourceOptionsObject>>,
    /// SharePoint site collections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_collections: Option<Vec<SourceOptionsSiteColl>>,
    /// Web crawl start URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<SourceOptionsWebCrawl>>,
    /// Cloud Object Storage buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<SourceOptionsBuckets>>,
    /// Crawl every bucket the credentials can read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_all_buckets: Option<bool>,
}

/// A Box folder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceOptionsFolder {
    /// Owner of the folder.
    pub owner_user_id: String,
    /// Folder ID.
    pub folder_id: String,
    /// Maximum documents to crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// A Salesforce object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceOptionsObject {
    /// Object name.
    pub name: String,
    /// Maximum documents to crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// A SharePoint site collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceOptionsSiteColl {
    /// Site collection path.
    pub site_collection_path: String,
    /// Maximum documents to crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// A web crawl seed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceOptionsWebCrawl {
    /// Start URL.
    pub url: String,
    /// Stay on the starting host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_to_starting_hosts: Option<bool>,
    /// `gentle`, `normal` or `aggressive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_speed: Option<String>,
    /// Accept self-signed certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_untrusted_certificate: Option<bool>,
    /// Maximum link depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_hops: Option<i64>,
    /// Per-request timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<i64>,
    /// Ignore robots.txt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_robots_txt: Option<bool>,
    /// URL prefixes to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blacklist: Option<Vec<String>>,
}

/// A Cloud Object Storage bucket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceOptionsBuckets {
    /// Bucket name.
    pub name: String,
    /// Maximum documents to crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Response of list_configurations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListConfigurationsResponse {
    /// Configurations.
    pub configurations: Option<Vec<Configuration>>,
}

/// Response of delete_configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteConfigurationResponse {
    /// Deleted configuration.
    pub configuration_id: Option<String>,
    /// `deleted`.
    pub status: Option<String>,
    /// Warnings, e.g. collections still using the configuration.
    pub notices: Option<Vec<Notice>>,
}

/// Options for create_configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateConfigurationOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Conversion settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<Conversions>,
    /// Enrichment steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<Enrichment>>,
    /// Normalizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizations: Option<Vec<NormalizationOperation>>,
    /// External source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateConfigurationOptions {
    /// Creates options for a new configuration.
    pub fn new(environment_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Options for list_configurations.
#[derive(Debug, Clone, Default)]
pub struct ListConfigurationsOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Exact name filter.
    pub name: Option<String>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl ListConfigurationsOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }
}

/// Options for get_configuration.
#[derive(Debug, Clone, Default)]
pub struct GetConfigurationOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Configuration ID.
    pub configuration_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl GetConfigurationOptions {
    /// Creates options for the given configuration.
    pub fn new(environment_id: impl Into<String>, configuration_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            configuration_id: configuration_id.into(),
            ..Default::default()
        }
    }
}

/// Options for update_configuration.
///
/// The configuration is replaced as a whole; omitted sections are reset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateConfigurationOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Configuration ID.
    #[serde(skip)]
    pub configuration_id: String,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Conversion settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<Conversions>,
    /// Enrichment steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<Enrichment>>,
    /// Normalizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizations: Option<Vec<NormalizationOperation>>,
    /// External source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateConfigurationOptions {
    /// Creates options replacing the given configuration.
    pub fn new(
        environment_id: impl Into<String>,
        configuration_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            configuration_id: configuration_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Options for delete_configuration.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfigurationOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Configuration ID.
    pub configuration_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl DeleteConfigurationOptions {
    /// Creates options for the given configuration.
    pub fn new(environment_id: impl Into<String>, configuration_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            configuration_id: configuration_id.into(),
            ..Default::default()
        }
    }
}

impl_with_header!(
    CreateConfigurationOptions,
    ListConfigurationsOptions,
    GetConfigurationOptions,
    UpdateConfigurationOptions,
    DeleteConfigurationOptions,
);
