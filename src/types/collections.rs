//! Collection types, including expansions and word lists.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Collection languages.
pub mod collection_language {
    /// English.
    pub const EN: &str = "en";
    /// Spanish.
    pub const ES: &str = "es";
    /// German.
    pub const DE: &str = "de";
    /// Arabic.
    pub const AR: &str = "ar";
    /// French.
    pub const FR: &str = "fr";
    /// Italian.
    pub const IT: &str = "it";
    /// Japanese.
    pub const JA: &str = "ja";
    /// Korean.
    pub const KO: &str = "ko";
    /// Portuguese.
    pub const PT: &str = "pt";
    /// Dutch.
    pub const NL: &str = "nl";
    /// Simplified Chinese.
    pub const ZH_CN: &str = "zh-CN";
}

/// Word list statuses.
pub mod word_list_status {
    /// In use.
    pub const ACTIVE: &str = "active";
    /// Being processed.
    pub const PENDING: &str = "pending";
    /// Not uploaded.
    pub const NOT_FOUND: &str = "not found";
}

/// A document collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection {
    /// Unique identifier.
    pub collection_id: Option<String>,
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated: Option<DateTime<Utc>>,
    /// `active` or `pending`.
    pub status: Option<String>,
    /// Configuration applied on ingestion.
    pub configuration_id: Option<String>,
    /// Language, see [`collection_language`].
    pub language: Option<String>,
    /// Document counts.
    pub document_counts: Option<DocumentCounts>,
    /// Disk usage.
    pub disk_usage: Option<CollectionDiskUsage>,
    /// Relevancy training status.
    pub training_status: Option<TrainingStatus>,
    /// Source crawl status.
    pub crawl_status: Option<CollectionCrawlStatus>,
    /// Smart Document Understanding status.
    pub smart_document_understanding: Option<SduStatus>,
}

/// Document counts of a collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentCounts {
    /// Indexed documents.
    pub available: Option<i64>,
    /// Documents being processed.
    pub processing: Option<i64>,
    /// Documents that failed to ingest.
    pub failed: Option<i64>,
    /// Documents waiting to be processed.
    pub pending: Option<i64>,
}

/// Disk usage of a collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionDiskUsage {
    /// Bytes used.
    pub used_bytes: Option<i64>,
}

/// Relevancy training status of a collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingStatus {
    /// Total training examples.
    pub total_examples: Option<i64>,
    /// A trained model is available.
    pub available: Option<bool>,
    /// Training is running.
    pub processing: Option<bool>,
    /// Enough queries were added.
    pub minimum_queries_added: Option<bool>,
    /// Enough examples were added.
    pub minimum_examples_added: Option<bool>,
    /// Labels are diverse enough.
    pub sufficient_label_diversity: Option<bool>,
    /// Training notices.
    pub notices: Option<i64>,
    /// Last successful training.
    pub successfully_trained: Option<DateTime<Utc>>,
    /// Last training data change.
    pub data_updated: Option<DateTime<Utc>>,
}

/// Crawl status of a collection with an external source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionCrawlStatus {
    /// Source crawl details.
    pub source_crawl: Option<SourceStatus>,
}

/// Status of a source crawl.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceStatus {
    /// `running`, `complete`, `not_configured`, `queued` or `unknown`.
    pub status: Option<String>,
    /// Next scheduled crawl.
    pub next_crawl: Option<DateTime<Utc>>,
}

/// Smart Document Understanding status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SduStatus {
    /// SDU is enabled.
    pub enabled: Option<bool>,
    /// Annotated pages.
    pub total_annotated_pages: Option<i64>,
    /// Total pages.
    pub total_pages: Option<i64>,
    /// Total documents.
    pub total_documents: Option<i64>,
    /// Custom fields.
    pub custom_fields: Option<SduCustomFields>,
}

/// Custom SDU field counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SduCustomFields {
    /// Fields defined.
    pub defined: Option<i64>,
    /// Fields allowed.
    pub maximum_allowed: Option<i64>,
}

/// Response of list_collections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListCollectionsResponse {
    /// Collections.
    pub collections: Option<Vec<Collection>>,
}

/// Response of delete_collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteCollectionResponse {
    /// Deleted collection.
    pub collection_id: Option<String>,
    /// `deleted`.
    pub status: Option<String>,
}

/// Query expansions of a collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Expansions {
    /// Expansion rules.
    pub expansions: Vec<Expansion>,
}

/// A query expansion rule.
///
/// Without `input_terms` the rule is bidirectional: every term expands to
/// all the others.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Expansion {
    /// Terms that trigger the expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_terms: Option<Vec<String>>,
    /// Terms added to the query.
    pub expanded_terms: Vec<String>,
}

/// A tokenization dictionary rule (Japanese collections).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenDictRule {
    /// Text to tokenize.
    pub text: String,
    /// Tokens the text splits into.
    pub tokens: Vec<String>,
    /// Readings of the tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readings: Option<Vec<String>>,
    /// Part of speech.
    pub part_of_speech: String,
}

/// Status of a tokenization dictionary or stopword list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenDictStatusResponse {
    /// Status, see [`word_list_status`].
    pub status: Option<String>,
    /// `tokenization_dictionary` or `stopwords`.
    #[serde(rename = "type")]
    pub list_type: Option<String>,
}

/// Options for create_collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCollectionOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Configuration to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// Language, see [`collection_language`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateCollectionOptions {
    /// Creates options for a new collection.
    pub fn new(environment_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the configuration.
    pub fn with_configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    /// Sets the language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Options for list_collections.
#[derive(Debug, Clone, Default)]
pub struct ListCollectionsOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Exact name filter.
    pub name: Option<String>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl ListCollectionsOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }

    /// Filters by exact name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Options for update_collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCollectionOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection ID.
    #[serde(skip)]
    pub collection_id: String,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Configuration to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateCollectionOptions {
    /// Creates options for the given collection.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Options naming a single collection.
///
/// Used by get_collection, delete_collection, list_collection_fields,
/// list_expansions, delete_expansions and the word list status and delete
/// operations.
#[derive(Debug, Clone, Default)]
pub struct CollectionOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl CollectionOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }
}

/// Options for get_collection.
pub type GetCollectionOptions = CollectionOptions;
/// Options for delete_collection.
pub type DeleteCollectionOptions = CollectionOptions;
/// Options for list_collection_fields.
pub type ListCollectionFieldsOptions = CollectionOptions;
/// Options for list_expansions.
pub type ListExpansionsOptions = CollectionOptions;
/// Options for delete_expansions.
pub type DeleteExpansionsOptions = CollectionOptions;
/// Options for get_tokenization_dictionary_status.
pub type GetTokenizationDictionaryStatusOptions = CollectionOptions;
/// Options for delete_tokenization_dictionary.
pub type DeleteTokenizationDictionaryOptions = CollectionOptions;
/// Options for get_stopword_list_status.
pub type GetStopwordListStatusOptions = CollectionOptions;
/// Options for delete_stopword_list.
pub type DeleteStopwordListOptions = CollectionOptions;

/// Options for create_expansions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateExpansionsOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection ID.
    #[serde(skip)]
    pub collection_id: String,
    /// Expansion rules; replaces the existing list.
    pub expansions: Vec<Expansion>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateExpansionsOptions {
    /// Creates options replacing the collection's expansions.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        expansions: Vec<Expansion>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            expansions,
            ..Default::default()
        }
    }
}

/// Options for create_tokenization_dictionary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTokenizationDictionaryOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection ID.
    #[serde(skip)]
    pub collection_id: String,
    /// Dictionary rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenization_rules: Option<Vec<TokenDictRule>>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateTokenizationDictionaryOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }

    /// Sets the dictionary rules.
    pub fn with_rules(mut self, rules: Vec<TokenDictRule>) -> Self {
        self.tokenization_rules = Some(rules);
        self
    }
}

/// Options for create_stopword_list.
#[derive(Debug, Clone, Default)]
pub struct CreateStopwordListOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// Stopword file, one word per line.
    pub stopword_file: Bytes,
    /// File name of the upload.
    pub stopword_filename: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl CreateStopwordListOptions {
    /// Creates options uploading a stopword file.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        stopword_file: impl Into<Bytes>,
        stopword_filename: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            stopword_file: stopword_file.into(),
            stopword_filename: stopword_filename.into(),
            headers: HashMap::new(),
        }
    }
}

impl_with_header!(
    CreateCollectionOptions,
    ListCollectionsOptions,
    UpdateCollectionOptions,
    CollectionOptions,
    CreateExpansionsOptions,
    CreateTokenizationDictionaryOptions,
    CreateStopwordListOptions,
);
