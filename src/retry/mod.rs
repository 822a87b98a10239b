// ============================================================================
// Retry Module
// Bounded retry with exponential backoff for flaky external calls
// ============================================================================
//
// This module provides:
// - RetryPolicy: attempt budget, initial delay, backoff multiplier
// - with_retry: the guard loop itself
// - RetryError: final failure carrying the attempt count
//
// Design principles:
// - Synchronous and blocking: the only suspension point is thread::sleep
//   between attempts; no async variant, no cancellation
// - No failure classification: every error is retried uniformly, so wrap
//   only idempotent read operations

mod guard;
mod policy;

pub use guard::{with_retry, RetryError};
pub use policy::RetryPolicy;
