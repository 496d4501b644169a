//! Shape detection and dispatch to the classifiers.
//!
//! The upstream endpoint serves one of two batch shapes and does not label
//! which. Following the first element decides for the whole batch: both
//! `startTime` and `endTime` keys select the exact-window classifier, a
//! `times` key selects the daily-schedule classifier, anything else is
//! unrecognized and yields empty buckets.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use arcwatch_core::{EventBuckets, ExactEvent, ScheduledEvent, classify_daily, classify_exact};

/// Routes a raw event batch to the matching classifier.
///
/// An empty batch short-circuits to empty buckets without touching either
/// classifier. Elements that fail to decode as the detected shape are logged
/// and skipped; the rest of the batch is still classified.
pub fn dispatch(raw: &[Value], now: DateTime<Utc>) -> EventBuckets {
    let Some(first) = raw.first() else {
        debug!("empty schedule batch");
        return EventBuckets::empty();
    };

    if first.get("startTime").is_some() && first.get("endTime").is_some() {
        info!("exact start/end schedule format detected");
        classify_exact(&decode_batch::<ExactEvent>(raw), now)
    } else if first.get("times").is_some() {
        info!("daily HH:MM schedule format detected");
        classify_daily(&decode_batch::<ScheduledEvent>(raw), now)
    } else {
        warn!("unrecognized schedule shape, no startTime/endTime or times");
        EventBuckets::empty()
    }
}

/// Decodes every element of the batch as `T`, skipping malformed entries.
fn decode_batch<T: DeserializeOwned>(raw: &[Value]) -> Vec<T> {
    raw.iter()
        .filter_map(|value| match serde_json::from_value(value.clone()) {
            Ok(event) => Some(event),
            Err(error) => {
                warn!(%error, "malformed event entry, skipping");
                None
            }
        })
        .collect()
}
