//! HTTP client for the upstream schedule API.
//!
//! One fetch per call, bounded by the configured timeout. A retryable
//! failure (network error or upstream 5xx) is retried exactly once after a
//! short backoff; everything else surfaces immediately.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ScheduleConfig;
use crate::error::{ProviderError, ProviderResult};

/// Backoff before the single retry.
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// The envelope returned by the schedule endpoint.
#[derive(Debug, Deserialize)]
struct SchedulePayload {
    #[serde(default)]
    data: Vec<Value>,
}

/// HTTP client for the schedule endpoint.
pub struct ScheduleClient {
    /// The underlying HTTP client.
    client: Client,
    /// Configuration.
    config: ScheduleConfig,
}

impl ScheduleClient {
    /// Creates a new schedule client with the given configuration.
    pub fn new(config: ScheduleConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                ProviderError::configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Returns the configured upstream URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Fetches the raw event list from the schedule endpoint.
    ///
    /// Returns the elements of the payload's `data` array, undecoded, so
    /// the dispatcher can detect which shape the batch carries.
    pub async fn fetch_raw(&self) -> ProviderResult<Vec<Value>> {
        match self.fetch_once().await {
            Ok(raw) => Ok(raw),
            Err(error) if error.is_retryable() && self.config.retry_on_failure => {
                warn!(%error, "schedule fetch failed, retrying once");
                tokio::time::sleep(RETRY_BACKOFF).await;
                self.fetch_once().await
            }
            Err(error) => Err(error),
        }
    }

    /// Performs a single fetch attempt.
    async fn fetch_once(&self) -> ProviderResult<Vec<Value>> {
        debug!(url = %self.config.url, "fetching schedule");

        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| ProviderError::network("schedule request failed").with_source(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let payload: SchedulePayload = response.json().await.map_err(|e| {
            ProviderError::invalid_response("failed to decode schedule payload").with_source(e)
        })?;

        debug!(events = payload.data.len(), "schedule payload decoded");
        Ok(payload.data)
    }
}

/// Maps a failure status to a provider error.
///
/// Only 5xx is transient: the upstream may recover, so the retry applies.
/// Anything else (404, 400, a stray redirect) is a permanent condition and
/// surfaces immediately.
fn status_error(status: reqwest::StatusCode) -> ProviderError {
    if status.is_server_error() {
        ProviderError::server(format!("schedule endpoint returned {}", status))
    } else {
        ProviderError::unexpected_status(format!(
            "unexpected status {} from schedule endpoint",
            status
        ))
    }
}
