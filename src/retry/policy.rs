// ============================================================================
// Retry Policy
// Configuration for bounded retry with exponential backoff
// ============================================================================

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Governs how [`with_retry`](super::with_retry) behaves.
///
/// Immutable once an invocation begins: the guard reads the policy by
/// reference and keeps its own transient attempt counter.
///
/// Defaults match the production AI/database call sites: 3 attempts, 2 s
/// initial delay, delay doubled between attempts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RetryPolicy {
    /// Total attempt budget, including the first call. A value of 1 means a
    /// single unguarded call; 0 is treated as 1.
    pub max_attempts: u32,

    /// Pause before the second attempt. Zero means no pause.
    pub initial_delay: Duration,

    /// Factor applied to the delay after each failed attempt. 1.0 keeps the
    /// delay constant; 2.0 doubles it (exponential backoff).
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(2),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given attempt budget and default backoff.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Builder method: set the pause before the second attempt.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Builder method: set the backoff multiplier.
    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Validate the policy.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if !self.backoff_multiplier.is_finite() || self.backoff_multiplier < 1.0 {
            return Err("backoff_multiplier must be a finite number >= 1".to_string());
        }
        Ok(())
    }

    /// Attempt budget with the zero case normalized away.
    #[inline]
    pub(crate) fn effective_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Backoff multiplier sanitized for delay arithmetic.
    #[inline]
    pub(crate) fn effective_multiplier(&self) -> f64 {
        if self.backoff_multiplier.is_finite() && self.backoff_multiplier >= 1.0 {
            self.backoff_multiplier
        } else {
            1.0
        }
    }
}
