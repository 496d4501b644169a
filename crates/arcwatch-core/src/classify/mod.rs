//! Time-window classification.
//!
//! Two evaluators turn raw schedule data into [`EventBuckets`]:
//! - [`classify_exact`] for events with absolute epoch-millisecond edges
//! - [`classify_daily`] for events with repeating daily `HH:MM` windows
//!
//! Both share the same contract: malformed entries are logged and skipped
//! without aborting the batch, qualifying events keep their input order,
//! and remaining times are rendered through
//! [`format_remaining`](crate::format_remaining).

mod daily;
mod exact;

pub use daily::classify_daily;
pub use exact::classify_exact;

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{DateTime, TimeZone, Utc};

    /// Create a UTC datetime for testing.
    pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }
}
