//! Retry policy for rate-limited upstream calls
//!
//! Only HTTP 429 responses are retried. Before retry `k` (0-indexed) the
//! caller waits `base_delay * 2^k`; with the defaults that is 1, 2, 4 and 8
//! seconds, five attempts in total.

use std::time::Duration;

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// Default delay before the first retry
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// Exponential backoff without jitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry, doubled for each following one
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Fail on the first 429
    pub fn disabled() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Total attempts including the first one
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay to wait before retry number `retry` (0-indexed)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Whether another attempt is allowed after `retries_done` retries
    pub fn should_retry(&self, retries_done: u32) -> bool {
        retries_done < self.max_retries
    }

    /// Every delay this policy can produce, in order
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        (0..self.max_retries).map(|retry| self.delay_for(retry))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_BASE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let policy = RetryPolicy::default();
        let delays: Vec<u64> = policy.delays().map(|d| d.as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 4, 8]);
        assert_eq!(policy.max_attempts(), 5);
    }

    #[test]
    fn test_should_retry() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(0));
        assert!(policy.should_retry(3));
        assert!(!policy.should_retry(4));
    }

    #[test]
    fn test_disabled_policy() {
        let policy = RetryPolicy::disabled();
        assert_eq!(policy.max_attempts(), 1);
        assert!(!policy.should_retry(0));
        assert_eq!(policy.delays().count(), 0);
    }

    #[test]
    fn test_large_retry_saturates() {
        let policy = RetryPolicy::new(64, Duration::from_secs(1));
        assert_eq!(policy.delay_for(40), Duration::from_secs(1).saturating_mul(u32::MAX));
    }
}
