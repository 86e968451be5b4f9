//! Resilience module: automatic retries with exponential backoff.

mod retry;

pub use retry::{RetryConfig, RetryExecutor, DEFAULT_MAX_RETRIES, DEFAULT_MAX_RETRY_INTERVAL};
