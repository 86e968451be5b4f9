//! Configuration module for the Discovery client.
//!
//! Provides the service URL, API version date, credentials, timeouts,
//! retry policy and default headers, either through a builder or from
//! environment variables.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::auth::{
    auth_types, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator,
    NoAuth,
};
use crate::errors::{ConfigurationError, DiscoveryResult};
use crate::resilience::RetryConfig;

/// Default service URL.
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.discovery.watson.cloud.ibm.com";

/// Default service name, used as the environment variable prefix.
pub const DEFAULT_SERVICE_NAME: &str = "discovery";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default connection timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the service URL for an IBM Cloud region.
pub fn get_service_url_for_region(region: &str) -> DiscoveryResult<&'static str> {
    let url = match region {
        "us-south" => "https://api.us-south.discovery.watson.cloud.ibm.com",
        "us-east" => "https://api.us-east.discovery.watson.cloud.ibm.com",
        "eu-de" => "https://api.eu-de.discovery.watson.cloud.ibm.com",
        "eu-gb" => "https://api.eu-gb.discovery.watson.cloud.ibm.com",
        "au-syd" => "https://api.au-syd.discovery.watson.cloud.ibm.com",
        "jp-tok" => "https://api.jp-tok.discovery.watson.cloud.ibm.com",
        "kr-seo" => "https://api.kr-seo.discovery.watson.cloud.ibm.com",
        _ => return Err(ConfigurationError::UnknownRegion(region.to_string()).into()),
    };
    Ok(url)
}

/// Configuration for the Discovery client.
#[derive(Clone)]
pub struct DiscoveryConfig {
    /// API version date (`YYYY-MM-DD`), sent on every request.
    pub version: String,
    /// Base URL for API requests.
    pub service_url: String,
    /// Request authenticator.
    pub authenticator: Arc<dyn Authenticator>,
    /// Overall request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept invalid TLS certificates.
    pub disable_ssl_verification: bool,
    /// Gzip-compress JSON request bodies.
    pub enable_gzip_compression: bool,
    /// Automatic retry policy; `None` disables retries.
    pub retry: Option<RetryConfig>,
    /// Headers added to every request.
    pub default_headers: HashMap<String, String>,
}

impl DiscoveryConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> DiscoveryConfigBuilder {
        DiscoveryConfigBuilder::new()
    }

    /// Creates a configuration from `DISCOVERY_*` environment variables.
    pub fn from_env(version: impl Into<String>) -> DiscoveryResult<Self> {
        Self::from_env_for_service(DEFAULT_SERVICE_NAME, version)
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// Each name is prefixed with the upper-cased service name, e.g.
    /// `DISCOVERY_APIKEY`:
    ///
    /// - `URL`: service URL
    /// - `AUTH_TYPE`: `iam`, `basic`, `bearertoken` or `noauth`
    /// - `APIKEY`, `AUTH_URL`, `CLIENT_ID`, `CLIENT_SECRET`: IAM credentials
    /// - `USERNAME`, `PASSWORD`: basic credentials
    /// - `BEARER_TOKEN`: static bearer token
    /// - `DISABLE_SSL`, `AUTH_DISABLE_SSL`, `ENABLE_GZIP`: `true` or `false`
    /// - `ENABLE_RETRIES`, `MAX_RETRIES`, `RETRY_INTERVAL` (seconds)
    ///
    /// When `AUTH_TYPE` is absent the type is inferred from whichever
    /// credentials are present.
    pub fn from_env_for_service(
        service_name: &str,
        version: impl Into<String>,
    ) -> DiscoveryResult<Self> {
        let env = EnvReader::new(service_name);
        let mut builder = DiscoveryConfigBuilder::new().version(version);

        if let Some(url) = env.get("URL") {
            builder = builder.service_url(url);
        }

        builder = builder.authenticator_arc(env.authenticator()?);

        if env.flag("DISABLE_SSL") {
            builder = builder.disable_ssl_verification(true);
        }
        if env.flag("ENABLE_GZIP") {
            builder = builder.enable_gzip_compression(true);
        }
        if env.flag("ENABLE_RETRIES") {
            let max_retries = env
                .get("MAX_RETRIES")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(0);
            let interval = env
                .get("RETRY_INTERVAL")
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::ZERO);
            builder = builder.retries(RetryConfig::new(max_retries, interval));
        }

        builder.build()
    }

    /// Returns the authentication type in use.
    pub fn authentication_type(&self) -> &'static str {
        self.authenticator.authentication_type()
    }
}

impl std::fmt::Debug for DiscoveryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryConfig")
            .field("version", &self.version)
            .field("service_url", &self.service_url)
            .field("authenticator", &self.authenticator.authentication_type())
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("disable_ssl_verification", &self.disable_ssl_verification)
            .field("enable_gzip_compression", &self.enable_gzip_compression)
            .field("retry", &self.retry)
            .field("default_headers", &self.default_headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for `DiscoveryConfig`.
#[derive(Default)]
pub struct DiscoveryConfigBuilder {
    version: Option<String>,
    service_url: Option<String>,
    authenticator: Option<Arc<dyn Authenticator>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    disable_ssl_verification: bool,
    enable_gzip_compression: bool,
    retry: Option<RetryConfig>,
    default_headers: HashMap<String, String>,
}

impl DiscoveryConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version date.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the service URL.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Sets the authenticator.
    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Arc::new(authenticator));
        self
    }

    /// Sets a shared authenticator.
    pub fn authenticator_arc(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Accepts invalid TLS certificates.
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Enables gzip compression of JSON request bodies.
    pub fn enable_gzip_compression(mut self, enable: bool) -> Self {
        self.enable_gzip_compression = enable;
        self
    }

    /// Enables automatic retries.
    pub fn retries(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Adds a header sent on every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> DiscoveryResult<DiscoveryConfig> {
        let version = self
            .version
            .filter(|v| !v.is_empty())
            .ok_or(ConfigurationError::MissingVersion)?;

        let authenticator = self.authenticator.ok_or_else(|| {
            ConfigurationError::MissingCredentials("an authenticator is required".to_string())
        })?;
        authenticator
            .validate()
            .map_err(|e| ConfigurationError::MissingCredentials(e.to_string()))?;

        let service_url = self
            .service_url
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        validate_service_url(&service_url)?;

        Ok(DiscoveryConfig {
            version,
            service_url,
            authenticator,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            disable_ssl_verification: self.disable_ssl_verification,
            enable_gzip_compression: self.enable_gzip_compression,
            retry: self.retry,
            default_headers: self.default_headers,
        })
    }
}

/// Checks that a non-empty service URL is an absolute http(s) URL.
///
/// An empty URL is accepted here and reported when a request is built.
pub(crate) fn validate_service_url(url: &str) -> DiscoveryResult<()> {
    if url.is_empty() {
        return Ok(());
    }

    let parsed = Url::parse(url)
        .map_err(|e| ConfigurationError::InvalidServiceUrl(format!("{}: {}", url, e)))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigurationError::InvalidServiceUrl(format!(
            "{}: unsupported scheme {}",
            url,
            parsed.scheme()
        ))
        .into());
    }
    Ok(())
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Reads `<SERVICE>_<NAME>` variables.
struct EnvReader {
    prefix: String,
}

impl EnvReader {
    fn new(service_name: &str) -> Self {
        Self {
            prefix: service_name.to_uppercase().replace('-', "_"),
        }
    }

    fn get(&self, name: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, name))
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn flag(&self, name: &str) -> bool {
        self.get(name)
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false)
    }

    fn authenticator(&self) -> DiscoveryResult<Arc<dyn Authenticator>> {
        let auth_type = self.get("AUTH_TYPE").map(|t| t.to_lowercase()).or_else(|| {
            if self.get("APIKEY").is_some() {
                Some(auth_types::IAM.to_string())
            } else if self.get("BEARER_TOKEN").is_some() {
                Some(auth_types::BEARER_TOKEN.to_string())
            } else if self.get("USERNAME").is_some() {
                Some(auth_types::BASIC.to_string())
            } else {
                None
            }
        });

        let missing = |name: &str| {
            ConfigurationError::MissingCredentials(format!("{}_{} is not set", self.prefix, name))
        };

        let authenticator: Arc<dyn Authenticator> = match auth_type.as_deref() {
            Some(auth_types::IAM) => {
                let apikey = self.get("APIKEY").ok_or_else(|| missing("APIKEY"))?;
                let mut iam = IamAuthenticator::new(apikey);
                if let Some(url) = self.get("AUTH_URL") {
                    iam = iam.with_url(url);
                }
                if let (Some(id), Some(secret)) = (self.get("CLIENT_ID"), self.get("CLIENT_SECRET")) {
                    iam = iam.with_client_credentials(id, secret);
                }
                if self.flag("AUTH_DISABLE_SSL") {
                    iam = iam.with_disable_ssl_verification(true);
                }
                Arc::new(iam)
            }
            Some(auth_types::BASIC) => {
                let username = self.get("USERNAME").ok_or_else(|| missing("USERNAME"))?;
                let password = self.get("PASSWORD").ok_or_else(|| missing("PASSWORD"))?;
                Arc::new(BasicAuthenticator::new(username, password))
            }
            Some(auth_types::BEARER_TOKEN) => {
                let token = self.get("BEARER_TOKEN").ok_or_else(|| missing("BEARER_TOKEN"))?;
                Arc::new(BearerTokenAuthenticator::new(token))
            }
            Some(auth_types::NO_AUTH) => Arc::new(NoAuth),
            Some(other) => {
                return Err(ConfigurationError::InvalidConfiguration(format!(
                    "Unsupported authentication type: {}",
                    other
                ))
                .into())
            }
            None => return Err(missing("APIKEY").into()),
        };

        Ok(authenticator)
    }
}
