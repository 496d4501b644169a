//! Classification of events with absolute start/end instants.

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info, warn};

use crate::duration::format_remaining;
use crate::event::{ClassifiedEvent, EventBuckets, ExactEvent};

/// Classifies exact-window events against the given instant.
///
/// Each event is triaged independently:
/// - `start <= now < end` lands in the active bucket with the time left to
///   its end;
/// - `start > now` lands in the upcoming bucket with the time to its start;
/// - events that already ended are dropped.
///
/// Events with a missing or zero timestamp, or a timestamp outside the
/// representable range, are logged and skipped; the rest of the batch is
/// unaffected. Input order is preserved within each bucket.
pub fn classify_exact(events: &[ExactEvent], now: DateTime<Utc>) -> EventBuckets {
    let mut buckets = EventBuckets::empty();

    for event in events {
        let name = event.display_name();
        let location = event.display_location();

        // Zero is treated as absent, matching upstream payloads that null
        // out timestamps by sending 0.
        let (Some(start_ms), Some(end_ms)) = (
            event.start_time.filter(|&ms| ms != 0),
            event.end_time.filter(|&ms| ms != 0),
        ) else {
            warn!(name, location, "missing start or end timestamp, skipping event");
            continue;
        };

        let (Some(start), Some(end)) = (from_millis(start_ms), from_millis(end_ms)) else {
            warn!(
                name,
                location, start_ms, end_ms, "timestamp out of range, skipping event"
            );
            continue;
        };

        if start <= now && now < end {
            let time_left = format_remaining(end - now);
            debug!(name, location, %time_left, "event active");
            buckets
                .active
                .push(ClassifiedEvent::new(name, location, time_left));
        } else if start > now {
            let starts_in = format_remaining(start - now);
            debug!(name, location, %starts_in, "event upcoming");
            buckets
                .upcoming
                .push(ClassifiedEvent::new(name, location, starts_in));
        }
        // now >= end: already over, neither bucket.
    }

    info!(
        active = buckets.active.len(),
        upcoming = buckets.upcoming.len(),
        "exact-window classification done"
    );
    buckets
}

/// Converts epoch milliseconds to a UTC instant, if representable.
fn from_millis(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}
