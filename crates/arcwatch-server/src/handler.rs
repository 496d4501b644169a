//! HTTP request handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::{info, warn};

use arcwatch_core::{EVENT_LABELS, EventBuckets, MAP_LABELS};
use arcwatch_provider::EventSource;

/// State shared across requests.
///
/// Only the schedule source lives here; all event data is request-scoped.
#[derive(Clone)]
pub struct AppState {
    /// The schedule source queried once per request.
    pub source: Arc<dyn EventSource>,
}

impl AppState {
    /// Creates state around the given source.
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self { source }
    }
}

/// `GET /api/user_events` — currently active and upcoming events.
///
/// A failing source is degraded service, not an error: the response is
/// still 200 with empty buckets, and the failure is logged.
pub async fn user_events(State(state): State<AppState>) -> Json<EventBuckets> {
    let now = Utc::now();

    match state.source.fetch_events(now).await {
        Ok(buckets) => {
            info!(
                source = state.source.name(),
                active = buckets.active.len(),
                upcoming = buckets.upcoming.len(),
                "serving classified events"
            );
            Json(buckets)
        }
        Err(error) => {
            warn!(
                source = state.source.name(),
                %error,
                "schedule source failed, serving empty buckets"
            );
            Json(EventBuckets::empty())
        }
    }
}

/// `GET /api/translations` — static localized label tables, pass-through
/// reference data for display layers.
pub async fn translations() -> Json<Value> {
    let events: serde_json::Map<String, Value> = EVENT_LABELS
        .iter()
        .map(|&(name, label)| (name.to_string(), Value::String(label.to_string())))
        .collect();
    let maps: serde_json::Map<String, Value> = MAP_LABELS
        .iter()
        .map(|&(name, label)| (name.to_string(), Value::String(label.to_string())))
        .collect();

    Json(json!({"events": events, "maps": maps}))
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
