//! Exponential backoff retry policy for provider calls.
//!
//! Wraps any fallible async operation whose error type reports whether a
//! retry may succeed. The delay before retry `n` is
//! `min(max_delay, base_delay * 2^(n-1))` plus a uniform jitter term.

use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

/// Errors that can opt in to being retried.
pub trait Retryable {
    /// Whether a retry may succeed for this error.
    fn is_retryable(&self) -> bool;
}

/// Exponential backoff retry policy.
///
/// Immutable after construction; a single policy instance is shared across
/// all calls of an adapter.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    max_retries: u32,
    /// Delay before the first retry.
    base_delay: Duration,
    /// Cap for the exponential delay, before jitter.
    max_delay: Duration,
    /// Fraction of the capped delay added as uniform jitter (0.0..=1.0).
    jitter_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            jitter_factor: 0.1,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            ..Self::default()
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_jitter_factor(mut self, jitter_factor: f64) -> Self {
        self.jitter_factor = jitter_factor;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Backoff delay before retry number `retry` (1-based), jitter included.
    fn delay_for(&self, retry: u32) -> Duration {
        let exponential = self.base_delay.as_secs_f64() * 2f64.powi(retry as i32 - 1);
        let capped = exponential.min(self.max_delay.as_secs_f64());
        let jitter_bound = self.jitter_factor * capped;
        let jitter = if jitter_bound > 0.0 {
            rand::rng().random_range(0.0..jitter_bound)
        } else {
            0.0
        };
        Duration::from_secs_f64(capped + jitter)
    }

    /// Execute `op`, retrying retryable failures with backoff.
    ///
    /// The operation runs once plus up to `max_retries` more times. A
    /// non-retryable error propagates immediately; the final error after
    /// exhaustion propagates unchanged. The success value is returned as-is.
    pub async fn execute<T, E, F, Fut>(&self, label: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Retryable + std::fmt::Display,
    {
        let mut retries = 0u32;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => {
                    retries += 1;
                    if retries > self.max_retries {
                        error!(
                            operation = label,
                            retries = self.max_retries,
                            error = %e,
                            "Giving up after exhausting retries"
                        );
                        return Err(e);
                    }

                    let wait = self.delay_for(retries);
                    warn!(
                        operation = label,
                        attempt = retries,
                        max_retries = self.max_retries,
                        wait_ms = wait.as_millis() as u64,
                        error = %e,
                        "Operation failed, retrying"
                    );
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }
}
