//! Request construction.

use bytes::Bytes;
use flate2::write::GzEncoder;
use flate2::Compression;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_ENCODING, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use url::Url;

use super::{HttpRequest, Method, MultipartBody, RequestBody};
use crate::config::DiscoveryConfig;
use crate::errors::{ConfigurationError, DiscoveryError, DiscoveryResult, ValidationError};

/// Characters escaped inside a single path segment (RFC 3986 unreserved set kept).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Header carrying SDK analytics for each operation.
pub const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds a [`HttpRequest`] for one operation.
///
/// Path templates use `{name}` placeholders; values are percent-encoded as
/// single path segments when the request is built.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    path: &'static str,
    operation_id: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    accept_json: bool,
    body: RequestBody,
    json_body: bool,
}

impl RequestBuilder {
    /// Creates a builder for `method` on the templated `path`.
    pub fn new(method: Method, path: &'static str, operation_id: &'static str) -> Self {
        Self {
            method,
            path,
            operation_id,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            accept_json: false,
            body: RequestBody::Empty,
            json_body: false,
        }
    }

    /// Returns the operation identifier.
    pub fn operation_id(&self) -> &'static str {
        self.operation_id
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Binds a path placeholder.
    pub fn path_param(mut self, name: &'static str, value: &str) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Appends a query parameter when a value is present.
    pub fn query_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Appends a comma-separated list parameter when the list is non-empty.
    pub fn query_list(self, name: &str, values: &[String]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values.join(",");
        self.query(name, joined)
    }

    /// Adds a header. Later headers replace earlier ones with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds caller-supplied headers.
    pub fn headers(mut self, headers: &HashMap<String, String>) -> Self {
        self.headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Requests a JSON response.
    pub fn accept_json(mut self) -> Self {
        self.accept_json = true;
        self
    }

    /// Sets a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> DiscoveryResult<Self> {
        let bytes = serde_json::to_vec(body)?;
        self.body = RequestBody::Bytes(Bytes::from(bytes));
        self.json_body = true;
        Ok(self)
    }

    /// Sets a multipart body.
    pub fn multipart(mut self, body: MultipartBody) -> Self {
        self.body = RequestBody::Multipart(body);
        self.json_body = false;
        self
    }

    /// Substitutes path placeholders.
    pub fn resolve_path(&self) -> DiscoveryResult<String> {
        let mut resolved = String::with_capacity(self.path.len());
        let mut rest = self.path;

        while let Some(start) = rest.find('{') {
            resolved.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after
                .find('}')
                .ok_or_else(|| ValidationError::UnresolvedPathParameter(rest.to_string()))?;
            let name = &after[..end];
            let value = self
                .path_params
                .iter()
                .find(|(param, _)| *param == name)
                .map(|(_, value)| value.as_str())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ValidationError::UnresolvedPathParameter(name.to_string()))?;
            resolved.push_str(&utf8_percent_encode(value, PATH_SEGMENT).to_string());
            rest = &after[end + 1..];
        }
        resolved.push_str(rest);

        Ok(resolved)
    }

    /// Resolves the request against the client configuration.
    ///
    /// Headers are layered as: configured defaults, SDK headers, then
    /// per-call headers.
    pub fn build(self, config: &DiscoveryConfig) -> DiscoveryResult<HttpRequest> {
        let url = self.build_url(&config.service_url, &config.version)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            insert_header(&mut headers, name, value)?;
        }
        if !config.user_agent.is_empty() {
            insert_header(&mut headers, USER_AGENT.as_str(), &config.user_agent)?;
        }
        insert_header(
            &mut headers,
            SDK_ANALYTICS_HEADER,
            &format!(
                "service_name=discovery;service_version=V1;operation_id={}",
                self.operation_id
            ),
        )?;
        if self.accept_json {
            headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        if self.json_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        for (name, value) in &self.headers {
            insert_header(&mut headers, name, value)?;
        }

        let mut body = self.body;
        if config.enable_gzip_compression && self.json_body {
            if let RequestBody::Bytes(bytes) = &body {
                body = RequestBody::Bytes(gzip(bytes)?);
                headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
            }
        }

        Ok(HttpRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }

    fn build_url(&self, service_url: &str, version: &str) -> DiscoveryResult<Url> {
        let base = service_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(ConfigurationError::MissingServiceUrl.into());
        }

        let path = self.resolve_path()?;
        let mut url = Url::parse(&format!("{}{}", base, path)).map_err(|e| {
            ConfigurationError::InvalidServiceUrl(format!("{}: {}", service_url, e))
        })?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("version", version);
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> DiscoveryResult<()> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ConfigurationError::InvalidHeader(name.to_string()))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| ConfigurationError::InvalidHeader(format!("{}: invalid value", name)))?;
    headers.insert(header_name, header_value);
    Ok(())
}

fn gzip(data: &[u8]) -> DiscoveryResult<Bytes> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .and_then(|_| encoder.finish())
        .map(Bytes::from)
        .map_err(|e| DiscoveryError::Serialization {
            message: format!("Failed to compress request body: {}", e),
        })
}
