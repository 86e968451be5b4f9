//! HTTP transport implementation using reqwest.

use async_trait::async_trait;
use std::time::Duration;

use super::{HttpRequest, HttpResponse, RequestBody};
use crate::errors::{DiscoveryError, DiscoveryResult, TransportError};

/// HTTP transport trait for the Discovery client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns whatever response the server produced.
    ///
    /// Non-2xx responses are returned as `Ok`; status handling happens above
    /// the transport.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Configuration for [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Overall request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Accept invalid TLS certificates.
    pub disable_ssl_verification: bool,
    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(30),
            disable_ssl_verification: false,
            pool_max_idle_per_host: 10,
        }
    }
}

/// Reqwest-based HTTP transport implementation.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a new transport with configuration.
    pub fn new(config: &TransportConfig) -> DiscoveryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .danger_accept_invalid_certs(config.disable_ssl_verification)
            .gzip(true)
            .build()
            .map_err(|e| DiscoveryError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Creates a new transport with a custom client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .headers(request.headers);

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Bytes(bytes) => builder.body(bytes),
            RequestBody::Multipart(multipart) => builder.multipart(multipart.into_form()?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
