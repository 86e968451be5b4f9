//! Documents service.

use async_trait::async_trait;

use crate::client::RequestExecutor;
use crate::errors::{require, DiscoveryResult, ValidationError};
use crate::transport::{DetailedResponse, Method, MultipartBody, RequestBuilder};
use crate::types::documents::{
    AddDocumentOptions, DeleteDocumentResponse, DocumentAccepted, DocumentFile, DocumentOptions,
    DocumentStatus, UpdateDocumentOptions,
};

const DOCUMENTS_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/documents";
const DOCUMENT_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/documents/{document_id}";

/// Documents service trait.
#[async_trait]
pub trait DocumentsService: Send + Sync {
    /// Uploads a document for ingestion.
    ///
    /// Returns once the document is queued; poll [`get_document_status`]
    /// to follow processing.
    ///
    /// [`get_document_status`]: DocumentsService::get_document_status
    async fn add_document(
        &self,
        options: &AddDocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentAccepted>>;

    /// Returns the processing status of a document.
    async fn get_document_status(
        &self,
        options: &DocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentStatus>>;

    /// Replaces a document, or adds it under the given ID.
    async fn update_document(
        &self,
        options: &UpdateDocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentAccepted>>;

    /// Deletes a document.
    async fn delete_document(
        &self,
        options: &DocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteDocumentResponse>>;
}

/// Default implementation of the documents service.
pub struct DefaultDocumentsService<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> DefaultDocumentsService<'a> {
    /// Creates a new documents service.
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }
}

/// Builds the upload form; a file, metadata or both are required.
fn document_form(file: Option<&DocumentFile>, metadata: Option<&str>) -> DiscoveryResult<MultipartBody> {
    if file.is_none() && metadata.is_none() {
        return Err(ValidationError::InvalidField {
            field: "file",
            reason: "at least one of file or metadata must be supplied".to_string(),
        }
        .into());
    }

    let mut form = MultipartBody::new();
    if let Some(file) = file {
        if let Some(content_type) = &file.content_type {
            if let Err(e) = content_type.parse::<mime::Mime>() {
                return Err(ValidationError::InvalidField {
                    field: "file",
                    reason: format!("invalid content type {}: {}", content_type, e),
                }
                .into());
            }
        }
        form = form.file(
            "file",
            file.data.clone(),
            file.filename.clone(),
            file.content_type.clone(),
        );
    }
    if let Some(metadata) = metadata {
        form = form.file(
            "metadata",
            metadata.to_string().into(),
            None,
            Some("text/plain".to_string()),
        );
    }
    Ok(form)
}

#[async_trait]
impl<'a> DocumentsService for DefaultDocumentsService<'a> {
    async fn add_document(
        &self,
        options: &AddDocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentAccepted>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;
        let form = document_form(options.file.as_ref(), options.metadata.as_deref())?;

        let request = RequestBuilder::new(Method::Post, DOCUMENTS_PATH, "AddDocument")
            .path_param("environment_id", &options.environment_id)
            .path_param("collection_id", &options.collection_id)
            .accept_json()
            .headers(&options.headers)
            .multipart(form);
        self.executor.invoke(request).await
    }

    async fn get_document_status(
        &self,
        options: &DocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentStatus>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;
        require("document_id", &options.document_id)?;

        let request = RequestBuilder::new(Method::Get, DOCUMENT_PATH, "GetDocumentStatus")
            .path_param("environment_id", &options.environment_id)
            .path_param("collection_id", &options.collection_id)
            .path_param("document_id", &options.document_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }

    async fn update_document(
        &self,
        options: &UpdateDocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DocumentAccepted>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;
        require("document_id", &options.document_id)?;
        let form = document_form(options.file.as_ref(), options.metadata.as_deref())?;

        let request = RequestBuilder::new(Method::Post, DOCUMENT_PATH, "UpdateDocument")
            .path_param("environment_id", &options.environment_id)
            .path_param("collection_id", &options.collection_id)
            .path_param("document_id", &options.document_id)
            .accept_json()
            .headers(&options.headers)
            .multipart(form);
        self.executor.invoke(request).await
    }

    async fn delete_document(
        &self,
        options: &DocumentOptions,
    ) -> DiscoveryResult<DetailedResponse<DeleteDocumentResponse>> {
        require("environment_id", &options.environment_id)?;
        require("collection_id", &options.collection_id)?;
        require("document_id", &options.document_id)?;

        let request = RequestBuilder::new(Method::Delete, DOCUMENT_PATH, "DeleteDocument")
            .path_param("environment_id", &options.environment_id)
            .path_param("collection_id", &options.collection_id)
            .path_param("document_id", &options.document_id)
            .accept_json()
            .headers(&options.headers);
        self.executor.invoke(request).await
    }
}
