// ============================================================================
// Retry Guard
// Bounded retry loop with exponential backoff for fallible operations
// ============================================================================

use super::policy::RetryPolicy;
use std::fmt;
use std::thread;
use std::time::Duration;

/// Final failure after the attempt budget is exhausted.
///
/// Carries the last underlying error plus the number of attempts made, so
/// callers and logs can distinguish "failed once" from "failed despite the
/// full budget".
#[derive(Debug)]
pub struct RetryError<E> {
    attempts: u32,
    source: E,
}

impl<E> RetryError<E> {
    /// Total attempts made before giving up.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The last underlying error.
    pub fn inner(&self) -> &E {
        &self.source
    }

    /// Consume the wrapper and recover the underlying error.
    pub fn into_inner(self) -> E {
        self.source
    }
}

impl<E: fmt::Display> fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "operation failed after {} attempt(s): {}",
            self.attempts, self.source
        )
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RetryError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Run `operation` up to `policy.max_attempts` times.
///
/// The first attempt runs immediately. After each failed attempt that still
/// has budget left, the failure is logged, the calling thread sleeps for the
/// current delay, and the delay is multiplied by the backoff factor. The
/// first success returns immediately; exhausting the budget returns the last
/// error wrapped in [`RetryError`].
///
/// Every error is treated as transient — there is no failure classification.
/// Wrap only idempotent read operations.
///
/// # Example
/// ```
/// use reporting_engine::retry::{with_retry, RetryPolicy};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(3).with_initial_delay(Duration::ZERO);
/// let mut calls = 0;
///
/// let result: Result<u32, _> = with_retry(&policy, || {
///     calls += 1;
///     if calls < 3 {
///         Err("connection reset")
///     } else {
///         Ok(42)
///     }
/// });
///
/// assert_eq!(result.unwrap(), 42);
/// assert_eq!(calls, 3);
/// ```
pub fn with_retry<T, E, F>(policy: &RetryPolicy, mut operation: F) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    let budget = policy.effective_attempts();
    let multiplier = policy.effective_multiplier();
    let mut delay = policy.initial_delay;
    let mut attempt = 1;

    loop {
        match operation() {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= budget {
                    return Err(RetryError {
                        attempts: attempt,
                        source: error,
                    });
                }

                tracing::warn!(
                    attempt,
                    max_attempts = budget,
                    retry_in = ?delay,
                    error = %error,
                    "attempt failed, retrying"
                );

                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                delay = next_delay(delay, multiplier);
                attempt += 1;
            }
        }
    }
}

/// Grow the delay by the backoff factor, saturating instead of panicking on
/// overflow.
fn next_delay(delay: Duration, multiplier: f64) -> Duration {
    let secs = delay.as_secs_f64() * multiplier;
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}
