//! Multipart form bodies.
//!
//! `reqwest::multipart::Form` is consumed on send, so forms are kept as owned
//! parts and converted at the last moment.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use crate::errors::TransportError;

/// A single form part.
#[derive(Debug, Clone)]
pub struct FormPart {
    /// Form field name.
    pub name: String,
    /// Part content.
    pub data: Bytes,
    /// File name, for file parts.
    pub filename: Option<String>,
    /// Part content type.
    pub content_type: Option<String>,
}

/// An owned multipart form.
#[derive(Debug, Clone, Default)]
pub struct MultipartBody {
    parts: Vec<FormPart>,
}

impl MultipartBody {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain text part.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            data: Bytes::from(value.into()),
            filename: None,
            content_type: None,
        });
        self
    }

    /// Adds a file part.
    pub fn file(
        mut self,
        name: impl Into<String>,
        data: Bytes,
        filename: Option<String>,
        content_type: Option<String>,
    ) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            data,
            filename,
            content_type,
        });
        self
    }

    /// Returns the parts in insertion order.
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Returns the part with the given field name.
    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Returns true if the form has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Converts into a reqwest form.
    pub fn into_form(self) -> Result<Form, TransportError> {
        let mut form = Form::new();

        for part in self.parts {
            let mut reqwest_part = Part::bytes(part.data.to_vec());
            if let Some(filename) = part.filename {
                reqwest_part = reqwest_part.file_name(filename);
            }
            if let Some(content_type) = part.content_type {
                reqwest_part = reqwest_part.mime_str(&content_type).map_err(|e| {
                    TransportError::Http(format!("Invalid content type {}: {}", content_type, e))
                })?;
            }
            form = form.part(part.name, reqwest_part);
        }

        Ok(form)
    }
}
