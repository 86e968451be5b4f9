//! Request executor with auth, retries, deadlines and error mapping.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info_span, Instrument};

use crate::config::DiscoveryConfig;
use crate::errors::{DiscoveryError, DiscoveryResult};
use crate::resilience::RetryExecutor;
use crate::transport::{
    DetailedResponse, HttpRequest, HttpResponse, HttpTransport, RequestBuilder, ResponseParser,
};

/// Executes operation requests.
///
/// For each call the executor:
/// - resolves the request against the configuration
/// - authenticates and sends every attempt through the transport
/// - retries retryable failures when a retry policy is configured
/// - enforces the caller's deadline across all attempts
#[derive(Clone)]
pub struct RequestExecutor {
    config: DiscoveryConfig,
    transport: Arc<dyn HttpTransport>,
    deadline: Option<Instant>,
}

impl RequestExecutor {
    /// Creates a new request executor.
    pub fn new(config: DiscoveryConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config,
            transport,
            deadline: None,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut DiscoveryConfig {
        &mut self.config
    }

    pub(crate) fn set_transport(&mut self, transport: Arc<dyn HttpTransport>) {
        self.transport = transport;
    }

    /// Returns the deadline applied to calls, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns a copy that enforces `deadline` on every call.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// Executes a request and decodes the JSON response.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> DiscoveryResult<DetailedResponse<T>> {
        let operation = request.operation_id();
        let response = self.execute(request).await?;
        ResponseParser::parse(response).map_err(|e| {
            debug!(operation, error = %e, "Failed to decode response");
            e
        })
    }

    /// Executes a request whose response body is ignored.
    pub async fn invoke_empty(&self, request: RequestBuilder) -> DiscoveryResult<DetailedResponse<()>> {
        let response = self.execute(request).await?;
        ResponseParser::parse_empty(response)
    }

    /// Executes a request and returns the raw 2xx response.
    pub async fn execute(&self, request: RequestBuilder) -> DiscoveryResult<HttpResponse> {
        let operation = request.operation_id();
        let http_request = request.build(&self.config)?;

        let span = info_span!(
            "discovery_request",
            operation,
            method = http_request.method.as_str(),
            path = http_request.url.path(),
        );
        let fut = self.send_with_retries(operation, http_request).instrument(span);

        match self.deadline {
            Some(deadline) => {
                let started = Instant::now();
                match tokio::time::timeout_at(deadline, fut).await {
                    Ok(result) => result,
                    Err(_) => {
                        debug!(operation, "Deadline exceeded");
                        Err(DiscoveryError::DeadlineExceeded {
                            elapsed: started.elapsed(),
                        })
                    }
                }
            }
            None => fut.await,
        }
    }

    async fn send_with_retries(
        &self,
        operation: &'static str,
        request: HttpRequest,
    ) -> DiscoveryResult<HttpResponse> {
        let request = &request;
        match &self.config.retry {
            Some(retry) => {
                RetryExecutor::new(retry.clone())
                    .execute(operation, move |attempt| self.send_once(operation, request, attempt))
                    .await
            }
            None => self.send_once(operation, request, 0).await,
        }
    }

    async fn send_once(
        &self,
        operation: &'static str,
        request: &HttpRequest,
        attempt: u32,
    ) -> DiscoveryResult<HttpResponse> {
        let mut request = request.clone();
        self.config
            .authenticator
            .authenticate(&mut request.headers)
            .await?;

        debug!(operation, attempt, "Sending request");
        let started = Instant::now();
        let response = self.transport.send(request).await.map_err(|e| {
            debug!(operation, attempt, error = %e, "Transport failure");
            DiscoveryError::Transport(e)
        })?;

        debug!(
            operation,
            attempt,
            status = response.status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Received response"
        );

        if !response.status.is_success() {
            return Err(ResponseParser::map_error(&response));
        }
        Ok(response)
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("config", &self.config)
            .field("deadline", &self.deadline)
            .finish()
    }
}
