//! Mock implementations for testing.

pub mod transport;

pub use transport::{MockResponse, MockTransport, RecordedRequest};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::auth::Authenticator;
use crate::client::DiscoveryV1;
use crate::errors::{AuthenticationError, DiscoveryResult};

/// Service URL used by [`mock_client`].
pub const MOCK_SERVICE_URL: &str = "https://discovery.mock";

/// Version date used by [`mock_client`].
pub const MOCK_VERSION: &str = "2019-04-30";

/// Creates a client that sends every request through `transport`.
pub fn mock_client(transport: Arc<MockTransport>) -> DiscoveryResult<DiscoveryV1> {
    DiscoveryV1::builder()
        .version(MOCK_VERSION)
        .service_url(MOCK_SERVICE_URL)
        .authenticator(MockAuthenticator::new())
        .transport(transport)
        .build()
}

/// Authenticator that sets a fixed bearer token and counts its calls.
#[derive(Debug, Default)]
pub struct MockAuthenticator {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl MockAuthenticator {
    /// Token placed in the `Authorization` header.
    pub const TOKEN: &'static str = "mock-token";

    /// Creates an authenticator that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an authenticator whose token requests always fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns a shared counter of authenticate calls.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    fn authentication_type(&self) -> &'static str {
        "mock"
    }

    fn validate(&self) -> Result<(), AuthenticationError> {
        Ok(())
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthenticationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AuthenticationError::TokenRequestFailed(
                "mock token endpoint unavailable".to_string(),
            ));
        }
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_static("Bearer mock-token"),
        );
        Ok(())
    }
}
