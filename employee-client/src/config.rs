//! Upstream client configuration

use std::time::Duration;

use uuid::Uuid;

use crate::RetryPolicy;

/// Default per-call timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the upstream employee service
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Server base URL (e.g., "http://localhost:8112")
    pub base_url: String,

    /// Employee resource path appended to the base URL (e.g., "/api/v1/employee")
    pub resource_path: String,

    /// Per-call timeout
    pub timeout: Duration,

    /// Retry policy for 429 responses
    pub retry: RetryPolicy,
}

impl UpstreamConfig {
    /// Create a new configuration with default timeout and retry policy
    pub fn new(base_url: impl Into<String>, resource_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            resource_path: resource_path.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Longest a single logical call can take
    ///
    /// Every attempt may run into the per-call timeout, plus every backoff
    /// wait between attempts.
    pub fn call_budget(&self) -> Duration {
        let attempts = self.timeout.saturating_mul(self.retry.max_attempts());
        self.retry
            .delays()
            .fold(attempts, |total, delay| total.saturating_add(delay))
    }

    /// URL of the employee collection
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.resource_path)
    }

    /// URL of a single employee
    pub fn employee_url(&self, id: Uuid) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new("http://localhost:8112", "/api/v1/employee")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_budget_covers_retries() {
        // 5 attempts x 10 s + 1 + 2 + 4 + 8 s of backoff
        assert_eq!(
            UpstreamConfig::default().call_budget(),
            Duration::from_secs(65)
        );

        let config = UpstreamConfig::default()
            .with_timeout(Duration::from_secs(2))
            .with_retry(RetryPolicy::disabled());
        assert_eq!(config.call_budget(), Duration::from_secs(2));
    }

    #[test]
    fn test_urls_are_concatenated() {
        let config = UpstreamConfig::new("http://upstream:9000", "/api/v1/employee");
        assert_eq!(
            config.collection_url(),
            "http://upstream:9000/api/v1/employee"
        );

        let id = Uuid::parse_str("4a3a170b-22cd-4ac2-aad1-9bb5b34a1507").unwrap();
        assert_eq!(
            config.employee_url(id),
            "http://upstream:9000/api/v1/employee/4a3a170b-22cd-4ac2-aad1-9bb5b34a1507"
        );
    }

    #[test]
    fn test_builder() {
        let config = UpstreamConfig::default()
            .with_timeout(Duration::from_millis(250))
            .with_retry(RetryPolicy::disabled());
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.retry.max_attempts(), 1);
    }
}
