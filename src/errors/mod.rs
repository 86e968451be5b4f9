//! Error types for the Watson Discovery client.
//!
//! Errors fall into four groups: local failures raised before any network
//! call (configuration and validation), transport failures, error responses
//! returned by the service, and responses that could not be decoded.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use std::time::Duration;
use thiserror::Error;

/// Result type for Discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Top-level error type for the Discovery client.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Client configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Operation options failed validation; no request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Credentials could not be produced for the request.
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The caller's deadline expired before the call completed.
    #[error("Deadline exceeded after {elapsed:?}")]
    DeadlineExceeded {
        /// Time spent before the deadline fired.
        elapsed: Duration,
    },

    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
        /// Service-specific error code, when provided.
        code: Option<String>,
        /// Response headers.
        headers: HeaderMap,
    },

    /// A successful response carried a body that could not be decoded.
    #[error("Failed to decode response body (HTTP {status}): {message}")]
    Deserialization {
        /// Decoder message.
        message: String,
        /// HTTP status code of the response.
        status: u16,
        /// Response headers.
        headers: HeaderMap,
        /// Raw response body.
        body: Bytes,
    },

    /// A request body could not be encoded.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Encoder message.
        message: String,
    },
}

impl DiscoveryError {
    /// Creates a configuration error with a free-form message.
    pub fn configuration(msg: impl Into<String>) -> Self {
        DiscoveryError::Configuration(ConfigurationError::InvalidConfiguration(msg.into()))
    }

    /// Creates a missing-field validation error.
    pub fn missing_field(field: &'static str) -> Self {
        DiscoveryError::Validation(ValidationError::MissingField { field })
    }

    /// Returns true if the error is worth retrying.
    ///
    /// Transport failures, 429 and 5xx responses (except 501) are retryable.
    /// Local failures, other 4xx responses and decode failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            DiscoveryError::Transport(_) => true,
            DiscoveryError::Api { status, .. } => {
                *status == 429 || (*status >= 500 && *status != 501)
            }
            _ => false,
        }
    }

    /// Returns the HTTP status code if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DiscoveryError::Api { status, .. } => Some(*status),
            DiscoveryError::Deserialization { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response headers if a response was received.
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            DiscoveryError::Api { headers, .. } => Some(headers),
            DiscoveryError::Deserialization { headers, .. } => Some(headers),
            _ => None,
        }
    }

    /// Returns the delay requested by a `Retry-After` header, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        self.headers()?
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
    }

    /// Returns true if the error was raised before any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            DiscoveryError::Configuration(_)
                | DiscoveryError::Validation(_)
                | DiscoveryError::Serialization { .. }
        )
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The service URL is empty.
    #[error("The service URL is missing")]
    MissingServiceUrl,

    /// The service URL could not be parsed.
    #[error("Invalid service URL: {0}")]
    InvalidServiceUrl(String),

    /// The API version date is empty.
    #[error("The version date is missing")]
    MissingVersion,

    /// No usable credentials were configured.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// A header name or value is not valid HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The region has no known service URL.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Any other configuration problem.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Validation errors raised before a request is built.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Field name as sent on the wire.
        field: &'static str,
    },

    /// A field holds a value the service will reject.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        /// Field name as sent on the wire.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A path template references a parameter that was not supplied.
    #[error("Unresolved path parameter: {0}")]
    UnresolvedPathParameter(String),
}

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// Credentials are empty or malformed.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The token endpoint could not be reached or rejected the request.
    #[error("Token request failed: {0}")]
    TokenRequestFailed(String),

    /// The token endpoint returned something unusable.
    #[error("Invalid token response: {0}")]
    InvalidTokenResponse(String),
}

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The request timed out.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Any other HTTP-level failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

impl From<reqwest::Error> for DiscoveryError {
    fn from(err: reqwest::Error) -> Self {
        DiscoveryError::Transport(err.into())
    }
}

impl From<serde_json::Error> for DiscoveryError {
    fn from(err: serde_json::Error) -> Self {
        DiscoveryError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for DiscoveryError {
    fn from(err: url::ParseError) -> Self {
        DiscoveryError::Configuration(ConfigurationError::InvalidServiceUrl(err.to_string()))
    }
}

/// Fails with a missing-field error when `value` is empty.
pub(crate) fn require(field: &'static str, value: &str) -> DiscoveryResult<()> {
    if value.is_empty() {
        return Err(DiscoveryError::missing_field(field));
    }
    Ok(())
}

/// Fails with a missing-field error when `value` is absent or empty.
pub(crate) fn require_opt(field: &'static str, value: Option<&str>) -> DiscoveryResult<()> {
    require(field, value.unwrap_or_default())
}

/// Fails with a missing-field error when `values` is empty.
pub(crate) fn require_list<T>(field: &'static str, values: &[T]) -> DiscoveryResult<()> {
    if values.is_empty() {
        return Err(DiscoveryError::missing_field(field));
    }
    Ok(())
}
