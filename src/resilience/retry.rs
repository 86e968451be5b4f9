//! Retry logic with exponential backoff and jitter.

use std::future::Future;
use std::time::Duration;
use tracing::warn;

use crate::errors::DiscoveryResult;

/// Retries used when a caller asks for zero.
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// Backoff cap used when a caller asks for a zero interval.
pub const DEFAULT_MAX_RETRY_INTERVAL: Duration = Duration::from_secs(30);

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Initial backoff delay.
    pub initial_backoff: Duration,
    /// Maximum backoff delay, also the cap for `Retry-After`.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
    /// Jitter factor (0.0 to 1.0).
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: Duration::from_secs(1),
            max_backoff: DEFAULT_MAX_RETRY_INTERVAL,
            backoff_multiplier: 2.0,
            jitter: 0.1,
        }
    }
}

impl RetryConfig {
    /// Creates a policy with the given limits.
    ///
    /// Zero values fall back to [`DEFAULT_MAX_RETRIES`] and
    /// [`DEFAULT_MAX_RETRY_INTERVAL`].
    pub fn new(max_retries: u32, max_retry_interval: Duration) -> Self {
        let defaults = Self::default();
        Self {
            max_retries: if max_retries == 0 {
                defaults.max_retries
            } else {
                max_retries
            },
            max_backoff: if max_retry_interval.is_zero() {
                defaults.max_backoff
            } else {
                max_retry_interval
            },
            ..defaults
        }
    }

    /// Sets the initial backoff delay.
    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    /// Sets the jitter factor.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }
}

/// Retry executor with exponential backoff.
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    /// Creates a new retry executor.
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Returns the retry configuration.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Executes an operation with retry logic.
    ///
    /// `f` receives the zero-based attempt number.
    pub async fn execute<F, Fut, T>(&self, operation: &str, mut f: F) -> DiscoveryResult<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = DiscoveryResult<T>>,
    {
        let mut attempt = 0;

        loop {
            match f(attempt).await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    if !error.is_retryable() || attempt >= self.config.max_retries {
                        return Err(error);
                    }

                    let delay = self.calculate_backoff(attempt, error.retry_after());
                    warn!(
                        operation,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Retrying request"
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Calculates the backoff delay with jitter.
    pub fn calculate_backoff(&self, attempt: u32, server_retry_after: Option<Duration>) -> Duration {
        if let Some(retry_after) = server_retry_after {
            return retry_after.min(self.config.max_backoff);
        }

        let base_delay = self.config.initial_backoff.as_secs_f64()
            * self.config.backoff_multiplier.powi(attempt as i32);
        let capped_delay = base_delay.min(self.config.max_backoff.as_secs_f64());

        let jitter_range = capped_delay * self.config.jitter;
        let jitter = (rand::random::<f64>() * 2.0 - 1.0) * jitter_range;
        let final_delay = (capped_delay + jitter)
            .max(0.0)
            .min(self.config.max_backoff.as_secs_f64());

        Duration::from_secs_f64(final_delay)
    }
}
