//! Event types for the schedule pipeline.
//!
//! This module provides the raw wire shapes returned by the upstream
//! schedule API and the classified output types:
//! - [`ExactEvent`]: an event with absolute epoch-millisecond start/end
//! - [`ScheduledEvent`]: an event with repeating daily `HH:MM` windows
//! - [`ClassifiedEvent`]: a display-ready active/upcoming entry
//! - [`EventBuckets`]: the per-request active/upcoming result pair
//!
//! The raw shapes are deliberately permissive: every field the classifier
//! needs is optional, and malformed entries are skipped during evaluation
//! rather than failing deserialization of the whole batch.

use serde::{Deserialize, Serialize};

/// Fallback display name for events without a `name` field.
pub const UNKNOWN_EVENT: &str = "Unknown Event";

/// Fallback display location for events without a `map` field.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Sentinel `end` value meaning "end of day / midnight", not a parseable
/// time of day.
pub const END_OF_DAY_SENTINEL: &str = "24:00";

/// An event defined by absolute start/end instants, as it comes off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactEvent {
    /// The event name.
    pub name: Option<String>,
    /// The map (location) the event occurs on.
    pub map: Option<String>,
    /// Start instant in epoch milliseconds.
    #[serde(rename = "startTime")]
    pub start_time: Option<i64>,
    /// End instant in epoch milliseconds.
    #[serde(rename = "endTime")]
    pub end_time: Option<i64>,
}

impl ExactEvent {
    /// Creates an exact event with both timestamps set.
    pub fn new(
        name: impl Into<String>,
        map: impl Into<String>,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            name: Some(name.into()),
            map: Some(map.into()),
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    /// Returns the display name, falling back to [`UNKNOWN_EVENT`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_EVENT)
    }

    /// Returns the display location, falling back to [`UNKNOWN_LOCATION`].
    pub fn display_location(&self) -> &str {
        self.map.as_deref().unwrap_or(UNKNOWN_LOCATION)
    }
}

/// A repeating daily time window in wall-clock `HH:MM` strings.
///
/// `end` may be the literal [`END_OF_DAY_SENTINEL`]. A window missing either
/// field is skipped during evaluation; the remaining windows of the same
/// event are still considered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start, `"HH:MM"` in 24h format.
    pub start: Option<String>,
    /// Window end, `"HH:MM"` or `"24:00"` for end of day.
    pub end: Option<String>,
}

impl TimeWindow {
    /// Creates a window with both edges set.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Returns true when the end is the end-of-day sentinel.
    pub fn ends_at_midnight(&self) -> bool {
        self.end.as_deref() == Some(END_OF_DAY_SENTINEL)
    }
}

/// An event defined by repeating daily windows, as it comes off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// The event name.
    pub name: Option<String>,
    /// The map (location) the event occurs on.
    pub map: Option<String>,
    /// The daily occurrence windows, evaluated independently.
    #[serde(default)]
    pub times: Vec<TimeWindow>,
}

impl ScheduledEvent {
    /// Creates a scheduled event with the given windows.
    pub fn new(name: impl Into<String>, map: impl Into<String>, times: Vec<TimeWindow>) -> Self {
        Self {
            name: Some(name.into()),
            map: Some(map.into()),
            times,
        }
    }

    /// Returns the display name, falling back to [`UNKNOWN_EVENT`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_EVENT)
    }

    /// Returns the display location, falling back to [`UNKNOWN_LOCATION`].
    pub fn display_location(&self) -> &str {
        self.map.as_deref().unwrap_or(UNKNOWN_LOCATION)
    }
}

/// A classified event ready for serialization into the response.
///
/// Never mutated after construction; owned by the response being built for
/// one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEvent {
    /// The event name.
    pub name: String,
    /// The event location.
    pub location: String,
    /// Remaining (active) or starting-in (upcoming) time, pre-formatted.
    pub time_left: String,
}

impl ClassifiedEvent {
    /// Creates a classified event.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        time_left: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            time_left: time_left.into(),
        }
    }
}

/// The active/upcoming result pair for one classification pass.
///
/// Built fresh per request and discarded after serialization; there is no
/// cross-request sharing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBuckets {
    /// Events whose window contains "now", in input order.
    pub active: Vec<ClassifiedEvent>,
    /// Events whose next occurrence start is in the future, in input order.
    pub upcoming: Vec<ClassifiedEvent>,
}

impl EventBuckets {
    /// Creates an empty pair of buckets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true when both buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.upcoming.is_empty()
    }

    /// Total number of classified entries across both buckets.
    pub fn len(&self) -> usize {
        self.active.len() + self.upcoming.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_event_display_fallbacks() {
        let event = ExactEvent {
            name: None,
            map: None,
            start_time: Some(1),
            end_time: Some(2),
        };
        assert_eq!(event.display_name(), UNKNOWN_EVENT);
        assert_eq!(event.display_location(), UNKNOWN_LOCATION);

        let event = ExactEvent::new("Matriarch", "Dam", 1, 2);
        assert_eq!(event.display_name(), "Matriarch");
        assert_eq!(event.display_location(), "Dam");
    }

    #[test]
    fn exact_event_wire_field_names() {
        let json = r#"{"name":"Night Raid","map":"Spaceport","startTime":1700000000000,"endTime":1700003600000}"#;
        let event: ExactEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.start_time, Some(1_700_000_000_000));
        assert_eq!(event.end_time, Some(1_700_003_600_000));

        let back = serde_json::to_string(&event).unwrap();
        assert!(back.contains("startTime"));
        assert!(back.contains("endTime"));
    }

    #[test]
    fn exact_event_missing_timestamps_deserialize() {
        let json = r#"{"name":"Harvester","map":"Dam"}"#;
        let event: ExactEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.start_time, None);
        assert_eq!(event.end_time, None);
    }

    #[test]
    fn time_window_sentinel_detection() {
        assert!(TimeWindow::new("10:00", "24:00").ends_at_midnight());
        assert!(!TimeWindow::new("10:00", "23:59").ends_at_midnight());
        assert!(
            !TimeWindow {
                start: Some("10:00".into()),
                end: None,
            }
            .ends_at_midnight()
        );
    }

    #[test]
    fn scheduled_event_missing_times_defaults_empty() {
        let json = r#"{"name":"Cold Snap","map":"Stella Montis"}"#;
        let event: ScheduledEvent = serde_json::from_str(json).unwrap();
        assert!(event.times.is_empty());
    }

    #[test]
    fn buckets_empty_and_len() {
        let mut buckets = EventBuckets::empty();
        assert!(buckets.is_empty());
        assert_eq!(buckets.len(), 0);

        buckets
            .active
            .push(ClassifiedEvent::new("Matriarch", "Dam", "5м"));
        assert!(!buckets.is_empty());
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn classified_event_serde_shape() {
        let event = ClassifiedEvent::new("Matriarch", "Dam", "1ч 5м");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"name":"Matriarch","location":"Dam","time_left":"1ч 5м"}"#);
    }
}
