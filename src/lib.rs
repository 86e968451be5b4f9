//! IBM Watson Discovery v1 Client Library
//!
//! An async Rust client for the Watson Discovery v1 REST API covering
//! environments, configurations, collections, documents, queries, training
//! data, user data, events and metrics, source credentials and gateways.
//!
//! # Features
//!
//! - **Full API Coverage**: every v1 operation as a typed async method
//! - **Authentication**: IAM API keys, basic auth, bearer tokens
//! - **Resilience**: opt-in retries with exponential backoff and `Retry-After`
//! - **Deadlines**: scoped client handles that bound a call's total time
//! - **Observability**: `tracing` spans per operation
//! - **Detailed Responses**: status code, headers and decoded body
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use integrations_watson_discovery::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DiscoveryV1::builder()
//!         .version("2019-04-30")
//!         .authenticator(IamAuthenticator::new("your-api-key"))
//!         .build()?;
//!
//!     let options = QueryOptions::new("environment-id", "collection-id").with_parameters(
//!         QueryParameters {
//!             natural_language_query: Some("How do I reset my password?".to_string()),
//!             count: Some(5),
//!             ..Default::default()
//!         },
//!     );
//!     let response = client.queries().query(&options).await?;
//!
//!     if let Some(result) = response.result {
//!         println!("{} matching documents", result.matching_results.unwrap_or(0));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod resilience;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use auth::{Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator, NoAuth};
pub use client::{DiscoveryV1, DiscoveryV1Builder};
pub use config::{get_service_url_for_region, DiscoveryConfig, DiscoveryConfigBuilder};
pub use errors::{DiscoveryError, DiscoveryResult};
pub use resilience::RetryConfig;
pub use transport::DetailedResponse;

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

/// Common imports for client users.
pub mod prelude {
    pub use crate::auth::{
        Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator, NoAuth,
    };
    pub use crate::client::{DiscoveryV1, DiscoveryV1Builder};
    pub use crate::config::DiscoveryConfig;
    pub use crate::errors::{DiscoveryError, DiscoveryResult};
    pub use crate::resilience::RetryConfig;
    pub use crate::services::{
        CollectionsService, ConfigurationsService, CredentialsService, DocumentsService,
        EnvironmentsService, EventsService, GatewaysService, QueriesService, TrainingDataService,
        UserDataService,
    };
    pub use crate::transport::DetailedResponse;
    pub use crate::types::*;
}
