//! Mock transport for testing.

use async_trait::async_trait;
use bytes::Bytes;
use flate2::read::GzDecoder;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_ENCODING, CONTENT_TYPE, RETRY_AFTER};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::io::Read;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::errors::TransportError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method, MultipartBody, RequestBody};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    request: HttpRequest,
}

impl RecordedRequest {
    /// HTTP method.
    pub fn method(&self) -> Method {
        self.request.method
    }

    /// URL path.
    pub fn path(&self) -> &str {
        self.request.url.path()
    }

    /// Full URL.
    pub fn url(&self) -> &url::Url {
        &self.request.url
    }

    /// Names of the query parameters in order.
    pub fn query_names(&self) -> Vec<String> {
        self.request
            .url
            .query_pairs()
            .map(|(name, _)| name.into_owned())
            .collect()
    }

    /// Value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.request
            .url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.request.headers
    }

    /// Value of a header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.request.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Raw body bytes, gzip-decoded when the body was compressed.
    pub fn body_bytes(&self) -> Option<Bytes> {
        let RequestBody::Bytes(bytes) = &self.request.body else {
            return None;
        };

        if self.header(CONTENT_ENCODING.as_str()) == Some("gzip") {
            let mut decoded = Vec::new();
            GzDecoder::new(bytes.as_ref()).read_to_end(&mut decoded).ok()?;
            return Some(Bytes::from(decoded));
        }
        Some(bytes.clone())
    }

    /// Body decoded as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body_bytes()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
    }

    /// Multipart form, for multipart requests.
    pub fn multipart(&self) -> Option<&MultipartBody> {
        match &self.request.body {
            RequestBody::Multipart(form) => Some(form),
            _ => None,
        }
    }

    /// Returns the captured request.
    pub fn into_inner(self) -> HttpRequest {
        self.request
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
    /// Time to wait before answering.
    pub delay: Option<Duration>,
    /// Fail with a transport error instead of answering.
    pub transport_error: Option<String>,
}

impl MockResponse {
    /// Creates a JSON response.
    pub fn json(status: u16, body: impl serde::Serialize) -> Self {
        Self::raw(
            status,
            "application/json",
            serde_json::to_vec(&body).unwrap_or_default(),
        )
    }

    /// Creates a response with an arbitrary body and content type.
    pub fn raw(status: u16, content_type: &str, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(content_type) {
            headers.insert(CONTENT_TYPE, value);
        }
        Self {
            status,
            headers,
            body: body.into(),
            delay: None,
            transport_error: None,
        }
    }

    /// Creates a response with no body.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
            delay: None,
            transport_error: None,
        }
    }

    /// Creates a Watson-style error response.
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, serde_json::json!({"code": status, "error": message}))
    }

    /// Creates a 429 response with a `Retry-After` header.
    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self::error(429, "Rate limit exceeded").with_header(RETRY_AFTER.as_str(), &retry_after_secs.to_string())
    }

    /// Creates a connection failure.
    pub fn connection_error(message: &str) -> Self {
        Self {
            transport_error: Some(message.to_string()),
            ..Self::empty(0)
        }
    }

    /// Adds a response header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Delays the response.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Transport that records requests and answers from a queue.
///
/// Once the queue is empty the default response is used, if set; otherwise
/// calls fail with a connection error.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
    default_response: Option<MockResponse>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Creates a transport with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    pub fn with_response(self, response: MockResponse) -> Self {
        self.enqueue_response(response);
        self
    }

    /// Answers with `response` whenever the queue is empty.
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Queues a response.
    pub fn enqueue_response(&self, response: MockResponse) {
        lock(&self.responses).push_back(response);
    }

    /// Returns all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Returns the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Returns the number of recorded requests.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn next_response(&self) -> Option<MockResponse> {
        lock(&self.responses)
            .pop_front()
            .or_else(|| self.default_response.clone())
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(RecordedRequest { request });

        let response = self
            .next_response()
            .ok_or_else(|| TransportError::Connect("No mock response queued".to_string()))?;

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = response.transport_error {
            return Err(TransportError::Connect(message));
        }

        let status = StatusCode::from_u16(response.status)
            .map_err(|e| TransportError::Http(e.to_string()))?;
        Ok(HttpResponse::new(status, response.headers, response.body))
    }
}
