//! EventSource trait and implementations.
//!
//! The HTTP boundary depends on [`EventSource`], not on the concrete
//! client, so handlers can be exercised against fixed or failing sources
//! in tests.

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};
use tracing::debug;

use arcwatch_core::EventBuckets;

use crate::client::ScheduleClient;
use crate::config::ScheduleConfig;
use crate::dispatch::dispatch;
use crate::error::{ProviderError, ProviderResult};

/// A boxed future for async trait methods.
///
/// Boxed futures keep the trait object-safe, so the server can hold an
/// `Arc<dyn EventSource>`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A source of classified schedule data.
///
/// One call performs one fetch-and-classify pass against the given instant;
/// there is no caching between calls.
pub trait EventSource: Send + Sync {
    /// Returns the name of this source (e.g., "metaforge").
    fn name(&self) -> &str;

    /// Fetches the schedule and classifies it against `now`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the upstream cannot be reached or its
    /// payload cannot be decoded. Per-event malformations never surface
    /// here; they are skipped during classification.
    fn fetch_events(&self, now: DateTime<Utc>) -> BoxFuture<'_, ProviderResult<EventBuckets>>;
}

/// The MetaForge events-schedule source.
pub struct MetaforgeSource {
    client: ScheduleClient,
}

impl MetaforgeSource {
    /// Creates a source with the given configuration.
    pub fn new(config: ScheduleConfig) -> ProviderResult<Self> {
        Ok(Self {
            client: ScheduleClient::new(config)?,
        })
    }
}

impl EventSource for MetaforgeSource {
    fn name(&self) -> &str {
        "metaforge"
    }

    fn fetch_events(&self, now: DateTime<Utc>) -> BoxFuture<'_, ProviderResult<EventBuckets>> {
        Box::pin(async move {
            let raw = self.client.fetch_raw().await?;
            debug!(source = self.name(), events = raw.len(), "classifying schedule batch");
            Ok(dispatch(&raw, now))
        })
    }
}

/// A source that always returns the same buckets.
///
/// Useful for testing the HTTP boundary without a network.
#[derive(Debug, Clone)]
pub struct StaticSource {
    buckets: EventBuckets,
}

impl StaticSource {
    /// Creates a source returning the given buckets.
    pub fn new(buckets: EventBuckets) -> Self {
        Self { buckets }
    }

    /// Creates a source returning empty buckets.
    pub fn empty() -> Self {
        Self::new(EventBuckets::empty())
    }
}

impl EventSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_events(&self, _now: DateTime<Utc>) -> BoxFuture<'_, ProviderResult<EventBuckets>> {
        let buckets = self.buckets.clone();
        Box::pin(async move { Ok(buckets) })
    }
}

/// A source that always fails.
///
/// Useful for pinning the degraded-response contract at the boundary.
#[derive(Debug)]
pub struct ErrorSource {
    error: ProviderError,
}

impl ErrorSource {
    /// Creates a source failing with the given error.
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

impl EventSource for ErrorSource {
    fn name(&self) -> &str {
        "error"
    }

    fn fetch_events(&self, _now: DateTime<Utc>) -> BoxFuture<'_, ProviderResult<EventBuckets>> {
        let error = ProviderError::new(self.error.code(), self.error.message());
        Box::pin(async move { Err(error) })
    }
}
