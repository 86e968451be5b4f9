//! Authenticators for the Discovery service.
//!
//! An [`Authenticator`] decorates each outgoing request with credentials.
//! It is invoked once per attempt, so a retried request picks up a freshly
//! refreshed token.
//!
//! # Examples
//!
//! ```no_run
//! use integrations_watson_discovery::auth::IamAuthenticator;
//!
//! let authenticator = IamAuthenticator::new("my-api-key");
//! ```

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
use crate::errors::AuthenticationError;

/// Default IAM token endpoint.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

/// Path of the token operation on the IAM server.
const IAM_TOKEN_PATH: &str = "/identity/token";

/// Grant type for API key exchange.
const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Fraction of a token's lifetime after which it is refreshed.
const REFRESH_FRACTION: f64 = 0.8;

/// Authentication type names, as used in `<SERVICE>_AUTH_TYPE`.
pub mod auth_types {
    /// No authentication.
    pub const NO_AUTH: &str = "noauth";
    /// HTTP basic authentication.
    pub const BASIC: &str = "basic";
    /// Static bearer token.
    pub const BEARER_TOKEN: &str = "bearertoken";
    /// IBM Cloud IAM API key exchange.
    pub const IAM: &str = "iam";
}

/// Adds credentials to requests.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns the authentication type name.
    fn authentication_type(&self) -> &'static str;

    /// Checks that the configured credentials are usable.
    fn validate(&self) -> Result<(), AuthenticationError>;

    /// Adds credentials to the request headers.
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthenticationError>;
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

#[async_trait]
impl Authenticator for NoAuth {
    fn authentication_type(&self) -> &'static str {
        auth_types::NO_AUTH
    }

    fn validate(&self) -> Result<(), AuthenticationError> {
        Ok(())
    }

    async fn authenticate(&self, _headers: &mut HeaderMap) -> Result<(), AuthenticationError> {
        Ok(())
    }
}

/// HTTP basic authentication.
pub struct BasicAuthenticator {
    username: String,
    password: SecretString,
}

impl BasicAuthenticator {
    /// Creates a basic authenticator.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> &'static str {
        auth_types::BASIC
    }

    fn validate(&self) -> Result<(), AuthenticationError> {
        check_credential("username", &self.username)?;
        check_credential("password", self.password.expose_secret())
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthenticationError> {
        let encoded = STANDARD.encode(format!(
            "{}:{}",
            self.username,
            self.password.expose_secret()
        ));
        headers.insert(AUTHORIZATION, sensitive_header(&format!("Basic {}", encoded))?);
        Ok(())
    }
}

/// Sends a caller-managed bearer token.
pub struct BearerTokenAuthenticator {
    token: SecretString,
}

impl BearerTokenAuthenticator {
    /// Creates a bearer token authenticator.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
        }
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> &'static str {
        auth_types::BEARER_TOKEN
    }

    fn validate(&self) -> Result<(), AuthenticationError> {
        check_credential("bearer token", self.token.expose_secret())
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthenticationError> {
        headers.insert(
            AUTHORIZATION,
            sensitive_header(&format!("Bearer {}", self.token.expose_secret()))?,
        );
        Ok(())
    }
}

/// A cached IAM access token.
#[derive(Clone)]
struct IamToken {
    access_token: SecretString,
    expires_at: DateTime<Utc>,
    refresh_at: DateTime<Utc>,
}

impl IamToken {
    fn needs_refresh(&self) -> bool {
        Utc::now() >= self.refresh_at
    }

    fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

#[derive(Deserialize)]
struct IamTokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Exchanges an IBM Cloud API key for short-lived bearer tokens.
///
/// Tokens are cached and refreshed once 80% of their lifetime has passed.
/// Concurrent callers share a single refresh.
pub struct IamAuthenticator {
    apikey: SecretString,
    url: String,
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    cached_token: Arc<RwLock<Option<IamToken>>>,
    timeout: std::time::Duration,
    disable_ssl_verification: bool,
    http_client: Client,
    custom_client: bool,
}

fn token_client(timeout: std::time::Duration, disable_ssl_verification: bool) -> Client {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
        .danger_accept_invalid_certs(disable_ssl_verification)
        .build()
        .unwrap_or_default()
}

impl IamAuthenticator {
    /// Creates an IAM authenticator for the given API key.
    pub fn new(apikey: impl Into<String>) -> Self {
        Self {
            apikey: SecretString::new(apikey.into()),
            url: DEFAULT_IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            cached_token: Arc::new(RwLock::new(None)),
            timeout: DEFAULT_TIMEOUT,
            disable_ssl_verification: false,
            http_client: token_client(DEFAULT_TIMEOUT, false),
            custom_client: false,
        }
    }

    /// Sets the timeout of token requests.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = timeout;
        self.rebuild_client();
        self
    }

    /// Accepts invalid TLS certificates from the IAM server.
    pub fn with_disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self.rebuild_client();
        self
    }

    fn rebuild_client(&mut self) {
        if !self.custom_client {
            self.http_client = token_client(self.timeout, self.disable_ssl_verification);
        }
    }

    /// Sets a custom IAM server URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets client credentials sent as basic auth on token requests.
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(SecretString::new(client_secret.into()));
        self
    }

    /// Uses a custom HTTP client for token requests.
    ///
    /// The client's own timeouts and TLS settings then apply;
    /// [`with_timeout`](Self::with_timeout) and
    /// [`with_disable_ssl_verification`](Self::with_disable_ssl_verification)
    /// no longer change it.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self.custom_client = true;
        self
    }

    /// Returns a valid access token, requesting a new one if needed.
    pub async fn access_token(&self) -> Result<SecretString, AuthenticationError> {
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.needs_refresh() {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let mut cached = self.cached_token.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(token) = cached.as_ref() {
            if !token.needs_refresh() {
                return Ok(token.access_token.clone());
            }
        }

        match self.request_token().await {
            Ok(token) => {
                let access_token = token.access_token.clone();
                *cached = Some(token);
                Ok(access_token)
            }
            // A token past its refresh point but not yet expired is still usable.
            Err(e) => match cached.as_ref() {
                Some(token) if !token.is_expired() => {
                    debug!(error = %e, "IAM refresh failed, using cached token");
                    Ok(token.access_token.clone())
                }
                _ => Err(e),
            },
        }
    }

    async fn request_token(&self) -> Result<IamToken, AuthenticationError> {
        let url = format!("{}{}", self.url.trim_end_matches('/'), IAM_TOKEN_PATH);
        debug!(url = %url, "Requesting IAM access token");

        let mut request = self
            .http_client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(&[
                ("grant_type", IAM_GRANT_TYPE),
                ("apikey", self.apikey.expose_secret().as_str()),
                ("response_type", "cloud_iam"),
            ]);

        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            request = request.basic_auth(id, Some(secret.expose_secret()));
        }

        let response = request.send().await.map_err(|e| {
            AuthenticationError::TokenRequestFailed(format!("HTTP request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AuthenticationError::TokenRequestFailed(format!(
                "IAM returned status {}: {}",
                status, text
            )));
        }

        let token: IamTokenResponse = response.json().await.map_err(|e| {
            AuthenticationError::InvalidTokenResponse(format!("Failed to parse response: {}", e))
        })?;

        let now = Utc::now();
        let lifetime = token.expires_in.max(0);
        let refresh_after = (lifetime as f64 * REFRESH_FRACTION) as i64;

        Ok(IamToken {
            access_token: SecretString::new(token.access_token),
            expires_at: now + Duration::seconds(lifetime),
            refresh_at: now + Duration::seconds(refresh_after),
        })
    }
}

impl std::fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("apikey", &"[REDACTED]")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .finish()
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    fn authentication_type(&self) -> &'static str {
        auth_types::IAM
    }

    fn validate(&self) -> Result<(), AuthenticationError> {
        check_credential("apikey", self.apikey.expose_secret())?;
        if self.client_id.is_some() != self.client_secret.is_some() {
            return Err(AuthenticationError::InvalidCredentials(
                "client_id and client_secret must be set together".to_string(),
            ));
        }
        Ok(())
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthenticationError> {
        let token = self.access_token().await?;
        headers.insert(
            AUTHORIZATION,
            sensitive_header(&format!("Bearer {}", token.expose_secret()))?,
        );
        Ok(())
    }
}

/// Rejects empty credentials and values wrapped in braces or quotes,
/// which usually come from copy-pasting a JSON credentials file.
fn check_credential(name: &str, value: &str) -> Result<(), AuthenticationError> {
    if value.is_empty() {
        return Err(AuthenticationError::InvalidCredentials(format!(
            "The {} cannot be empty",
            name
        )));
    }

    let bad: &[char] = &['{', '}', '"'];
    let starts_bad = value.starts_with(bad);
    let ends_bad = value.ends_with(bad);
    if starts_bad || ends_bad {
        return Err(AuthenticationError::InvalidCredentials(format!(
            "The {} shouldn't start or end with curly brackets or quotes",
            name
        )));
    }

    Ok(())
}

fn sensitive_header(value: &str) -> Result<HeaderValue, AuthenticationError> {
    let mut header = HeaderValue::from_str(value).map_err(|_| {
        AuthenticationError::InvalidCredentials("credentials contain invalid header characters".to_string())
    })?;
    header.set_sensitive(true);
    Ok(header)
}
