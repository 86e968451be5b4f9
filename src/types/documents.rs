//! Document ingestion types.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::Notice;

/// Document processing statuses.
pub mod document_status {
    /// Processed and indexed.
    pub const AVAILABLE: &str = "available";
    /// Indexed with notices.
    pub const AVAILABLE_WITH_NOTICES: &str = "available with notices";
    /// Failed to ingest.
    pub const FAILED: &str = "failed";
    /// Being processed.
    pub const PROCESSING: &str = "processing";
    /// Waiting to be processed.
    pub const PENDING: &str = "pending";
}

/// A file uploaded to a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFile {
    /// File content.
    pub data: Bytes,
    /// File name sent with the part.
    pub filename: Option<String>,
    /// Content type, e.g. `application/json` or `text/html`.
    pub content_type: Option<String>,
}

impl DocumentFile {
    /// Creates a file from raw content.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            ..Default::default()
        }
    }

    /// Sets the file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Response of add_document and update_document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentAccepted {
    /// Document ID.
    pub document_id: Option<String>,
    /// `processing` or `pending`.
    pub status: Option<String>,
    /// Notices raised on upload.
    pub notices: Option<Vec<Notice>>,
}

/// Response of get_document_status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentStatus {
    /// Document ID.
    pub document_id: Option<String>,
    /// Configuration used on ingestion.
    pub configuration_id: Option<String>,
    /// Status, see [`document_status`].
    pub status: Option<String>,
    /// Status description.
    pub status_description: Option<String>,
    /// Uploaded file name.
    pub filename: Option<String>,
    /// `pdf`, `html`, `word` or `json`.
    pub file_type: Option<String>,
    /// SHA-1 of the uploaded file.
    pub sha1: Option<String>,
    /// Ingestion notices.
    pub notices: Option<Vec<Notice>>,
}

/// Response of delete_document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    /// Deleted document.
    pub document_id: Option<String>,
    /// `deleted`.
    pub status: Option<String>,
}

/// Options for add_document.
///
/// At least one of `file` or `metadata` must be set.
#[derive(Debug, Clone, Default)]
pub struct AddDocumentOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// File to ingest.
    pub file: Option<DocumentFile>,
    /// JSON metadata attached to the document.
    pub metadata: Option<String>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl AddDocumentOptions {
    /// Creates options for the given collection.
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }

    /// Sets the file.
    pub fn with_file(mut self, file: DocumentFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Sets the metadata.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

/// Options for update_document.
///
/// At least one of `file` or `metadata` must be set.
#[derive(Debug, Clone, Default)]
pub struct UpdateDocumentOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// Document ID.
    pub document_id: String,
    /// Replacement file.
    pub file: Option<DocumentFile>,
    /// Replacement metadata.
    pub metadata: Option<String>,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl UpdateDocumentOptions {
    /// Creates options for the given document.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            document_id: document_id.into(),
            ..Default::default()
        }
    }

    /// Sets the file.
    pub fn with_file(mut self, file: DocumentFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Sets the metadata.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

/// Options naming a single document.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Collection ID.
    pub collection_id: String,
    /// Document ID.
    pub document_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl DocumentOptions {
    /// Creates options for the given document.
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: environment_id.into(),
            collection_id: collection_id.into(),
            document_id: document_id.into(),
            ..Default::default()
        }
    }
}

/// Options for get_document_status.
pub type GetDocumentStatusOptions = DocumentOptions;
/// Options for delete_document.
pub type DeleteDocumentOptions = DocumentOptions;

impl_with_header!(AddDocumentOptions, UpdateDocumentOptions, DocumentOptions);
