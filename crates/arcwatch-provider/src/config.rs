//! Schedule source configuration.

use std::time::Duration;

/// Default upstream schedule endpoint.
pub const DEFAULT_SCHEDULE_URL: &str = "https://metaforge.app/api/arc-raiders/events-schedule";

/// Default bound on a single outbound fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the schedule client.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// The upstream schedule URL.
    pub url: String,

    /// Timeout for a single outbound request.
    pub timeout: Duration,

    /// User-Agent header sent with requests.
    pub user_agent: String,

    /// Whether to retry once (with a short backoff) on a retryable error.
    pub retry_on_failure: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SCHEDULE_URL.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: format!("arcwatch/{}", env!("CARGO_PKG_VERSION")),
            retry_on_failure: true,
        }
    }
}

impl ScheduleConfig {
    /// Creates a configuration pointing at the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Builder: set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder: set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builder: enable or disable the single retry.
    pub fn with_retry_on_failure(mut self, retry: bool) -> Self {
        self.retry_on_failure = retry;
        self
    }
}
