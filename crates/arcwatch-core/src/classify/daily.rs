//! Classification of events with repeating daily `HH:MM` windows.
//!
//! Windows are evaluated against the UTC date and time-of-day derived from
//! "now". Two shapes exist:
//! - same-day windows (`start <= end`, or an end of `"24:00"` meaning end
//!   of day);
//! - overnight windows (`start > end`), which wrap past midnight.
//!
//! Day-rollover arithmetic combines a calendar date with a time of day
//! explicitly instead of subtracting bare durations, so the wrap boundary
//! cannot drift by a day.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info, warn};

use crate::duration::format_remaining;
use crate::event::{ClassifiedEvent, EventBuckets, ScheduledEvent, END_OF_DAY_SENTINEL};

/// The parsed end edge of a daily window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowEnd {
    /// A concrete wall-clock time on some day.
    At(NaiveTime),
    /// The `"24:00"` sentinel: the window runs to the next midnight.
    EndOfDay,
}

/// The outcome of evaluating one window against "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowState {
    /// The window contains "now"; `remaining` runs to its effective end.
    Active { remaining: Duration },
    /// The window does not contain "now"; `starts_in` runs to the next
    /// occurrence of its start.
    Upcoming { starts_in: Duration },
}

/// Classifies daily-schedule events against the given instant.
///
/// Every window of every event is evaluated independently, so an event with
/// several concurrently active windows appears in the active bucket once per
/// window. Windows with a missing or unparseable edge are logged and
/// skipped; the remaining windows of the same event are still evaluated.
pub fn classify_daily(events: &[ScheduledEvent], now: DateTime<Utc>) -> EventBuckets {
    let mut buckets = EventBuckets::empty();

    for event in events {
        let name = event.display_name();
        let location = event.display_location();

        for window in &event.times {
            let (Some(start_str), Some(end_str)) = (window.start.as_deref(), window.end.as_deref())
            else {
                warn!(name, location, "missing start or end time, skipping window");
                continue;
            };

            let start = match NaiveTime::parse_from_str(start_str, "%H:%M") {
                Ok(time) => time,
                Err(error) => {
                    warn!(name, location, start_str, %error, "unparseable window start, skipping");
                    continue;
                }
            };

            let end = if end_str == END_OF_DAY_SENTINEL {
                WindowEnd::EndOfDay
            } else {
                match NaiveTime::parse_from_str(end_str, "%H:%M") {
                    Ok(time) => WindowEnd::At(time),
                    Err(error) => {
                        warn!(name, location, end_str, %error, "unparseable window end, skipping");
                        continue;
                    }
                }
            };

            match evaluate_window(start, end, now) {
                WindowState::Active { remaining } => {
                    let time_left = format_remaining(remaining);
                    debug!(name, location, %time_left, "window active");
                    buckets
                        .active
                        .push(ClassifiedEvent::new(name, location, time_left));
                }
                WindowState::Upcoming { starts_in } => {
                    let starts_in = format_remaining(starts_in);
                    debug!(name, location, %starts_in, "window upcoming");
                    buckets
                        .upcoming
                        .push(ClassifiedEvent::new(name, location, starts_in));
                }
            }
        }
    }

    info!(
        active = buckets.active.len(),
        upcoming = buckets.upcoming.len(),
        "daily-schedule classification done"
    );
    buckets
}

/// Evaluates a single parsed window against "now".
fn evaluate_window(start: NaiveTime, end: WindowEnd, now: DateTime<Utc>) -> WindowState {
    let today = now.date_naive();
    let now_time = now.time();

    match end {
        WindowEnd::EndOfDay => {
            // Same-day shape with midnight as the effective end; any
            // time-of-day is before 24:00, so only the start gate matters.
            if start <= now_time {
                WindowState::Active {
                    remaining: next_midnight(today) - now,
                }
            } else {
                WindowState::Upcoming {
                    starts_in: instant_at(today, start) - now,
                }
            }
        }
        WindowEnd::At(end_time) if start <= end_time => {
            // Same-day window.
            if start <= now_time && now_time < end_time {
                WindowState::Active {
                    remaining: instant_at(today, end_time) - now,
                }
            } else if now_time < start {
                WindowState::Upcoming {
                    starts_in: instant_at(today, start) - now,
                }
            } else {
                // Already past today's occurrence.
                WindowState::Upcoming {
                    starts_in: instant_at(tomorrow(today), start) - now,
                }
            }
        }
        WindowEnd::At(end_time) => {
            // Overnight window: active in the evening portion (past start)
            // or in the past-midnight portion (before end).
            if now_time >= start {
                WindowState::Active {
                    remaining: instant_at(tomorrow(today), end_time) - now,
                }
            } else if now_time < end_time {
                WindowState::Active {
                    remaining: instant_at(today, end_time) - now,
                }
            } else {
                // Dead zone between this window's end and its next start;
                // the next start is later today.
                WindowState::Upcoming {
                    starts_in: instant_at(today, start) - now,
                }
            }
        }
    }
}

/// Combines a UTC calendar date with a wall-clock time.
fn instant_at(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// The day after `date`.
fn tomorrow(date: NaiveDate) -> NaiveDate {
    date.succ_opt().expect("valid successor date")
}

/// Midnight at the start of the day after `date`.
fn next_midnight(date: NaiveDate) -> DateTime<Utc> {
    instant_at(tomorrow(date), NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::testing::utc;
    use crate::event::TimeWindow;

    fn single(window: TimeWindow) -> Vec<ScheduledEvent> {
        vec![ScheduledEvent::new("Night Raid", "Dam", vec![window])]
    }

    mod overnight {
        use super::*;

        #[test]
        fn active_past_midnight_ends_same_calendar_day() {
            let now = utc(2025, 6, 2, 0, 30, 0);
            let buckets = classify_daily(&single(TimeWindow::new("23:00", "01:00")), now);

            assert_eq!(buckets.active.len(), 1);
            assert!(buckets.upcoming.is_empty());
            // 00:30 -> 01:00 the same day.
            assert_eq!(buckets.active[0].time_left, "30м");
        }

        #[test]
        fn active_in_evening_ends_tomorrow() {
            let now = utc(2025, 6, 1, 23, 30, 0);
            let buckets = classify_daily(&single(TimeWindow::new("23:00", "01:00")), now);

            assert_eq!(buckets.active.len(), 1);
            // 23:30 -> 01:00 next day.
            assert_eq!(buckets.active[0].time_left, "1ч 30м");
        }

        #[test]
        fn dead_zone_is_upcoming_later_today() {
            let now = utc(2025, 6, 1, 22, 0, 0);
            let buckets = classify_daily(&single(TimeWindow::new("23:00", "01:00")), now);

            assert!(buckets.active.is_empty());
            assert_eq!(buckets.upcoming.len(), 1);
            assert_eq!(buckets.upcoming[0].time_left, "1ч");
        }

        #[test]
        fn end_boundary_is_exclusive() {
            // Exactly 01:00 with a 23:00-01:00 window: dead zone, next
            // start is tonight.
            let now = utc(2025, 6, 2, 1, 0, 0);
            let buckets = classify_daily(&single(TimeWindow::new("23:00", "01:00")), now);

            assert!(buckets.active.is_empty());
            assert_eq!(buckets.upcoming[0].time_left, "22ч");
        }
    }

    mod end_of_day_sentinel {
        use super::*;

        #[test]
        fn active_just_before_midnight() {
            let now = utc(2025, 6, 1, 23, 59, 0);
            let buckets = classify_daily(&single(TimeWindow::new("10:00", "24:00")), now);

            assert_eq!(buckets.active.len(), 1);
            assert_eq!(buckets.active[0].time_left, "1м");
        }

        #[test]
        fn upcoming_before_start() {
            let now = utc(2025, 6, 1, 9, 0, 0);
            let buckets = classify_daily(&single(TimeWindow::new("10:00", "24:00")), now);

            assert!(buckets.active.is_empty());
            assert_eq!(buckets.upcoming[0].time_left, "1ч");
        }

        #[test]
        fn active_at_start_runs_to_midnight() {
            let now = utc(2025, 6, 1, 10, 0, 0);
            let buckets = classify_daily(&single(TimeWindow::new("10:00", "24:00")), now);

            assert_eq!(buckets.active[0].time_left, "14ч");
        }
    }

    mod same_day {
        use super::*;

        #[test]
        fn active_inside_window() {
            let now = utc(2025, 6, 1, 11, 15, 0);
            let buckets = classify_daily(&single(TimeWindow::new("10:00", "12:00")), now);

            assert_eq!(buckets.active[0].time_left, "45м");
        }

        #[test]
        fn start_inclusive_end_exclusive() {
            let window = single(TimeWindow::new("10:00", "12:00"));

            let buckets = classify_daily(&window, utc(2025, 6, 1, 10, 0, 0));
            assert_eq!(buckets.active.len(), 1);

            let buckets = classify_daily(&window, utc(2025, 6, 1, 12, 0, 0));
            assert!(buckets.active.is_empty());
        }

        #[test]
        fn before_start_is_upcoming_today() {
            let now = utc(2025, 6, 1, 8, 30, 0);
            let buckets = classify_daily(&single(TimeWindow::new("10:00", "12:00")), now);

            assert_eq!(buckets.upcoming[0].time_left, "1ч 30м");
        }

        #[test]
        fn after_end_is_upcoming_tomorrow() {
            let now = utc(2025, 6, 1, 13, 0, 0);
            let buckets = classify_daily(&single(TimeWindow::new("10:00", "12:00")), now);

            // Next occurrence is 10:00 tomorrow.
            assert_eq!(buckets.upcoming[0].time_left, "21ч");
        }
    }

    mod robustness {
        use super::*;

        #[test]
        fn missing_edges_skip_only_that_window() {
            let event = ScheduledEvent::new(
                "Lush Blooms",
                "Buried City",
                vec![
                    TimeWindow {
                        start: Some("10:00".into()),
                        end: None,
                    },
                    TimeWindow::new("14:00", "16:00"),
                ],
            );
            let now = utc(2025, 6, 1, 15, 0, 0);
            let buckets = classify_daily(&[event], now);

            assert_eq!(buckets.active.len(), 1);
            assert_eq!(buckets.active[0].time_left, "1ч");
        }

        #[test]
        fn unparseable_times_skip_only_that_window() {
            let event = ScheduledEvent::new(
                "Uncovered Caches",
                "Blue Gate",
                vec![
                    TimeWindow::new("25:99", "26:00"),
                    TimeWindow::new("09:00", "not-a-time"),
                    TimeWindow::new("14:00", "16:00"),
                ],
            );
            let now = utc(2025, 6, 1, 13, 0, 0);
            let buckets = classify_daily(&[event], now);

            assert!(buckets.active.is_empty());
            assert_eq!(buckets.upcoming.len(), 1);
            assert_eq!(buckets.upcoming[0].time_left, "1ч");
        }

        #[test]
        fn concurrent_windows_duplicate_the_event() {
            // Overlapping windows both match: the event appears once per
            // matching window, which mirrors upstream behavior.
            let event = ScheduledEvent::new(
                "Electromagnetic Storm",
                "Spaceport",
                vec![
                    TimeWindow::new("10:00", "14:00"),
                    TimeWindow::new("11:00", "13:00"),
                ],
            );
            let now = utc(2025, 6, 1, 12, 0, 0);
            let buckets = classify_daily(&[event], now);

            assert_eq!(buckets.active.len(), 2);
            assert_eq!(buckets.active[0].time_left, "2ч");
            assert_eq!(buckets.active[1].time_left, "1ч");
        }

        #[test]
        fn event_without_windows_produces_nothing() {
            let event = ScheduledEvent::new("Hidden Bunker", "Dam", vec![]);
            let buckets = classify_daily(&[event], utc(2025, 6, 1, 12, 0, 0));
            assert!(buckets.is_empty());
        }
    }
}
