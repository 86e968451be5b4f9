//! Observability for the Discovery client.
//!
//! Every operation runs inside a `discovery_request` span carrying the
//! operation ID and HTTP method. Attempts, backoff delays and decode
//! failures are emitted as `tracing` events under this crate's target.
//! [`LoggingConfig`] installs a subscriber for applications that do not
//! configure one themselves.

pub mod logging;

pub use logging::{LogFormat, LogLevel, LoggingConfig, LoggingConfigBuilder};
