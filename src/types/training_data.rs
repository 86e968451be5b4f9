//! Relevancy training data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Training data of a collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingDataSet {
    /// Environment ID.
    pub environment_id: Option<String>,
    /// Collection ID.
    pub collection_id: Option<String>,
    /// Training queries.
    pub queries: Option<Vec<TrainingQuery>>,
}

/// A training query with its rated examples.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingQuery {
    /// Query ID.
    pub query_id: Option<String>,
    /// Natural language query.
    pub natural_language_query: Option<String>,
    /// Filter applied with the query.
    pub filter: Option<String>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated: Option<DateTime<Utc>>,
    /// Rated examples.
    pub examples: Option<Vec<TrainingExample>>,
}

/// A document rated against a training query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Rated document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Cross reference of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    /// Relevance rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<i64>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl TrainingExample {
    /// Creates an example rating `document_id`.
    pub fn new(document_id: impl Into<String>, relevance: i64) -> Self {
        Self {
            document_id: Some(document_id.into()),
            relevance: Some(relevance),
            ..Default::default()
        }
    }
}

/// Response of list_training_examples.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingExampleList {
    /// Examples.
    pub examples: Option<Vec<TrainingExample>>,
}

/// Options naming the training data of a collection.
///
/// Used by list_training_data and delete_all_training_data.
#[derive(Debug, Clone, Default)]
pub struct TrainingDataOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl TrainingDataOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }
}

/// Options for list_training_data.
pub type ListTrainingDataOptions = TrainingDataOptions;
/// Options for delete_all_training_data.
pub type DeleteAllTrainingDataOptions = TrainingDataOptions;

/// Options for add_training_data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddTrainingDataOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection ID.
    #[serde(skip)]
    pub collection_id: String,
    /// Natural language query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_language_query: Option<String>,
    /// Filter applied with the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Rated examples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<TrainingExample>>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl AddTrainingDataOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }

    /// Sets the natural language query.
    pub fn with_natural_language_query(mut self, query: impl Into<String>) -> Self {
        self.natural_language_query = Some(query.into());
        self
    }

    /// Sets the filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the examples.
    pub fn with_examples(mut self, examples: Vec<TrainingExample>) -> Self {
        self.examples = Some(examples);
        self
    }
}

/// Options naming a training query.
///
/// Used by get_training_data, delete_training_data and
/// list_training_examples.
#[derive(Debug, Clone, Default)]
pub struct TrainingQueryOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// Query ID.
    pub query_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl TrainingQueryOptions {
    /// Creates options for the given training query.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        query_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            query_id: query_id.into(),
            ..Default::default()
        }
    }
}

/// Options for get_training_data.
pub type GetTrainingDataOptions = TrainingQueryOptions;
/// Options for delete_training_data.
pub type DeleteTrainingDataOptions = TrainingQueryOptions;
/// Options for list_training_examples.
pub type ListTrainingExamplesOptions = TrainingQueryOptions;

/// Options for create_training_example.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTrainingExampleOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection ID.
    #[serde(skip)]
    pub collection_id: String,
    /// Query ID.
    #[serde(skip)]
    pub query_id: String,
    /// Rated document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Cross reference of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    /// Relevance rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<i64>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateTrainingExampleOptions {
    /// Creates options for the given training query.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        query_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            query_id: query_id.into(),
            ..Default::default()
        }
    }

    /// Sets the rated document.
    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    /// Sets the relevance rating.
    pub fn with_relevance(mut self, relevance: i64) -> Self {
        self.relevance = Some(relevance);
        self
    }
}

/// Options naming a training example.
///
/// Used by get_training_example and delete_training_example.
#[derive(Debug, Clone, Default)]
pub struct TrainingExampleOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// Query ID.
    pub query_id: String,
    /// Example ID.
    pub example_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl TrainingExampleOptions {
    /// Creates options for the given example.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        query_id: impl Into<String>,
        example_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            query_id: query_id.into(),
            example_id: example_id.into(),
            ..Default::default()
        }
    }
}

/// Options for get_training_example.
pub type GetTrainingExampleOptions = TrainingExampleOptions;
/// Options for delete_training_example.
pub type DeleteTrainingExampleOptions = TrainingExampleOptions;

/// Options for update_training_example.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTrainingExampleOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Collection ID.
    #[serde(skip)]
    pub collection_id: String,
    /// Query ID.
    #[serde(skip)]
    pub query_id: String,
    /// Example ID.
    #[serde(skip)]
    pub example_id: String,
    /// New cross reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_reference: Option<String>,
    /// New relevance rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<i64>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateTrainingExampleOptions {
    /// Creates options for the given example.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        query_id: impl Into<String>,
        example_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            query_id: query_id.into(),
            example_id: example_id.into(),
            ..Default::default()
        }
    }

    /// Sets the relevance rating.
    pub fn with_relevance(mut self, relevance: i64) -> Self {
        self.relevance = Some(relevance);
        self
    }
}

impl_with_header!(
    TrainingDataOptions,
    AddTrainingDataOptions,
    TrainingQueryOptions,
    CreateTrainingExampleOptions,
    TrainingExampleOptions,
    UpdateTrainingExampleOptions,
);
