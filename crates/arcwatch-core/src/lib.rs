//! Core types and logic: events, window classification, duration formatting

pub mod classify;
pub mod duration;
pub mod event;
pub mod tracing;
pub mod translate;

pub use classify::{classify_daily, classify_exact};
pub use duration::format_remaining;
pub use event::{
    ClassifiedEvent, END_OF_DAY_SENTINEL, EventBuckets, ExactEvent, ScheduledEvent, TimeWindow,
    UNKNOWN_EVENT, UNKNOWN_LOCATION,
};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
pub use translate::{EVENT_LABELS, MAP_LABELS, event_label, map_label};
