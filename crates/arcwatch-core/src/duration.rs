//! Remaining-time formatting.
//!
//! Durations are rendered as compact localized strings with unit dropping:
//! `"1ч 5м 30с"`, `"45м"`, `"30с"`. Zero-valued hour and minute tokens are
//! omitted; the seconds token is kept whenever it is the only one left, so
//! the output is never empty.

use chrono::Duration;

/// Formats a duration as a compact `"<h>ч <m>м <s>с"` string.
///
/// The decomposition truncates to whole seconds. Negative durations (clock
/// skew between "now" and a window edge) clamp to zero and render as `"0с"`.
///
/// # Examples
///
/// ```
/// use arcwatch_core::format_remaining;
/// use chrono::Duration;
///
/// assert_eq!(format_remaining(Duration::seconds(90)), "1м 30с");
/// assert_eq!(format_remaining(Duration::seconds(3600)), "1ч");
/// assert_eq!(format_remaining(Duration::zero()), "0с");
/// ```
pub fn format_remaining(duration: Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts: Vec<String> = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}ч", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}м", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}с", seconds));
    }

    parts.join(" ")
}
