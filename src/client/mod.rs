//! Watson Discovery v1 client.

mod executor;

pub use executor::RequestExecutor;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::auth::Authenticator;
use crate::config::{validate_service_url, DiscoveryConfig, DiscoveryConfigBuilder};
use crate::errors::DiscoveryResult;
use crate::resilience::RetryConfig;
use crate::services::{
    CollectionsService, ConfigurationsService, CredentialsService, DefaultCollectionsService,
    DefaultConfigurationsService, DefaultCredentialsService, DefaultDocumentsService,
    DefaultEnvironmentsService, DefaultEventsService, DefaultGatewaysService,
    DefaultQueriesService, DefaultTrainingDataService, DefaultUserDataService, DocumentsService,
    EnvironmentsService, EventsService, GatewaysService, QueriesService, TrainingDataService,
    UserDataService,
};
use crate::transport::{HttpTransport, ReqwestTransport, TransportConfig};

/// The Watson Discovery v1 client.
///
/// Cloning is cheap; clones share the HTTP connection pool and the
/// authenticator's token cache.
///
/// # Examples
///
/// ```no_run
/// use integrations_watson_discovery::prelude::*;
///
/// # async fn example() -> Result<(), DiscoveryError> {
/// let client = DiscoveryV1::builder()
///     .version("2019-04-30")
///     .authenticator(IamAuthenticator::new("my-api-key"))
///     .build()?;
///
/// let environments = client
///     .environments()
///     .list_environments(&ListEnvironmentsOptions::new())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct DiscoveryV1 {
    executor: RequestExecutor,
}

impl DiscoveryV1 {
    /// Creates a new client with the given configuration.
    pub fn new(config: DiscoveryConfig) -> DiscoveryResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(&transport_config(&config))?);
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client that sends requests through a custom transport.
    pub fn with_transport(config: DiscoveryConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            executor: RequestExecutor::new(config, transport),
        }
    }

    /// Creates a new client builder.
    pub fn builder() -> DiscoveryV1Builder {
        DiscoveryV1Builder::new()
    }

    /// Creates a client from `DISCOVERY_*` environment variables.
    pub fn from_env(version: impl Into<String>) -> DiscoveryResult<Self> {
        Self::new(DiscoveryConfig::from_env(version)?)
    }

    /// Creates a client from environment variables prefixed with `service_name`.
    pub fn from_env_for_service(service_name: &str, version: impl Into<String>) -> DiscoveryResult<Self> {
        Self::new(DiscoveryConfig::from_env_for_service(service_name, version)?)
    }

    /// Returns the environments service.
    pub fn environments(&self) -> impl EnvironmentsService + '_ {
        DefaultEnvironmentsService::new(&self.executor)
    }

    /// Returns the configurations service.
    pub fn configurations(&self) -> impl ConfigurationsService + '_ {
        DefaultConfigurationsService::new(&self.executor)
    }

    /// Returns the collections service.
    pub fn collections(&self) -> impl CollectionsService + '_ {
        DefaultCollectionsService::new(&self.executor)
    }

    /// Returns the documents service.
    pub fn documents(&self) -> impl DocumentsService + '_ {
        DefaultDocumentsService::new(&self.executor)
    }

    /// Returns the queries service.
    pub fn queries(&self) -> impl QueriesService + '_ {
        DefaultQueriesService::new(&self.executor)
    }

    /// Returns the training data service.
    pub fn training_data(&self) -> impl TrainingDataService + '_ {
        DefaultTrainingDataService::new(&self.executor)
    }

    /// Returns the user data service.
    pub fn user_data(&self) -> impl UserDataService + '_ {
        DefaultUserDataService::new(&self.executor)
    }

    /// Returns the events and metrics service.
    pub fn events(&self) -> impl EventsService + '_ {
        DefaultEventsService::new(&self.executor)
    }

    /// Returns the source credentials service.
    pub fn credentials(&self) -> impl CredentialsService + '_ {
        DefaultCredentialsService::new(&self.executor)
    }

    /// Returns the gateways service.
    pub fn gateways(&self) -> impl GatewaysService + '_ {
        DefaultGatewaysService::new(&self.executor)
    }

    /// Returns a copy of the client whose calls fail with
    /// `DeadlineExceeded` once `deadline` passes, retries included.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            executor: self.executor.with_deadline(deadline),
        }
    }

    /// Returns a copy of the client whose calls must finish within `timeout`
    /// from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns the request executor.
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &DiscoveryConfig {
        self.executor.config()
    }

    /// Returns the API version date.
    pub fn version(&self) -> &str {
        &self.config().version
    }

    /// Returns the service URL.
    pub fn service_url(&self) -> &str {
        &self.config().service_url
    }

    /// Sets the service URL.
    ///
    /// An empty URL is accepted; subsequent calls then fail with a
    /// missing service URL error.
    pub fn set_service_url(&mut self, url: impl Into<String>) -> DiscoveryResult<()> {
        let url = url.into();
        validate_service_url(&url)?;
        self.executor.config_mut().service_url = url;
        Ok(())
    }

    /// Returns the authenticator.
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.config().authenticator
    }

    /// Enables automatic retries.
    ///
    /// Zero values select the defaults (4 retries, 30 second interval cap).
    pub fn enable_retries(&mut self, max_retries: u32, max_retry_interval: Duration) {
        self.executor.config_mut().retry = Some(RetryConfig::new(max_retries, max_retry_interval));
    }

    /// Disables automatic retries.
    pub fn disable_retries(&mut self) {
        self.executor.config_mut().retry = None;
    }

    /// Accepts invalid TLS certificates on subsequent calls.
    ///
    /// This replaces the transport with a new reqwest transport, including
    /// any transport supplied through [`DiscoveryV1::with_transport`].
    pub fn disable_ssl_verification(&mut self) -> DiscoveryResult<()> {
        self.executor.config_mut().disable_ssl_verification = true;
        let transport = ReqwestTransport::new(&transport_config(self.executor.config()))?;
        self.executor.set_transport(Arc::new(transport));
        Ok(())
    }

    /// Enables or disables gzip compression of JSON request bodies.
    pub fn set_enable_gzip_compression(&mut self, enabled: bool) {
        self.executor.config_mut().enable_gzip_compression = enabled;
    }

    /// Returns whether request bodies are gzip-compressed.
    pub fn enable_gzip_compression(&self) -> bool {
        self.config().enable_gzip_compression
    }

    /// Replaces the headers sent on every request.
    pub fn set_default_headers(&mut self, headers: HashMap<String, String>) {
        self.executor.config_mut().default_headers = headers;
    }
}

fn transport_config(config: &DiscoveryConfig) -> TransportConfig {
    TransportConfig {
        timeout: config.timeout,
        connect_timeout: config.connect_timeout,
        disable_ssl_verification: config.disable_ssl_verification,
        ..Default::default()
    }
}

/// Builder for the Discovery client.
#[derive(Default)]
pub struct DiscoveryV1Builder {
    config: DiscoveryConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl DiscoveryV1Builder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version date.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.version(version);
        self
    }

    /// Sets the service URL.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.service_url(url);
        self
    }

    /// Sets the authenticator.
    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.config = self.config.authenticator(authenticator);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Enables automatic retries.
    pub fn retries(mut self, retry: RetryConfig) -> Self {
        self.config = self.config.retries(retry);
        self
    }

    /// Enables gzip compression of JSON request bodies.
    pub fn enable_gzip_compression(mut self, enable: bool) -> Self {
        self.config = self.config.enable_gzip_compression(enable);
        self
    }

    /// Adds a header sent on every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config = self.config.header(name, value);
        self
    }

    /// Sends requests through a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> DiscoveryResult<DiscoveryV1> {
        let config = self.config.build()?;
        match self.transport {
            Some(transport) => Ok(DiscoveryV1::with_transport(config, transport)),
            None => DiscoveryV1::new(config),
        }
    }
}
