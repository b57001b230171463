//! Gap inversion: merged busy blocks → candidate meeting slots.
//!
//! Inverts the busy blocks against the whole-day bound, keeping only gaps at
//! least as long as the requested duration.

use crate::range::TimeRange;

/// Compute every gap of at least `duration_minutes` around the given busy
/// blocks, which must come from
/// [`merge_busy_intervals`](crate::freebusy::merge_busy_intervals).
///
/// Two rules take precedence over gap inversion:
/// - a duration longer than the day can never fit, whatever the calendar;
/// - no busy blocks at all means the whole day is open, whatever the
///   duration.
///
/// The result is sorted by end minute.
pub fn available_ranges(busy_blocks: &[TimeRange], duration_minutes: i64) -> Vec<TimeRange> {
    if duration_minutes > i64::from(TimeRange::WHOLE_DAY.duration()) {
        return Vec::new();
    }
    if busy_blocks.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    let day_start = TimeRange::WHOLE_DAY.start();
    let day_end = TimeRange::WHOLE_DAY.end();
    // A negative requested duration behaves like zero, so every emitted gap
    // has start <= end.
    let needed = duration_minutes.max(0);

    let mut available = Vec::new();

    let first = busy_blocks[0];
    if i64::from(first.start() - day_start) >= needed {
        available.push(TimeRange::new_unchecked(day_start, first.start()));
    }

    for pair in busy_blocks.windows(2) {
        if i64::from(pair[1].start() - pair[0].end()) >= needed {
            available.push(TimeRange::new_unchecked(pair[0].end(), pair[1].start()));
        }
    }

    let last = busy_blocks[busy_blocks.len() - 1];
    if i64::from(day_end - last.end()) >= needed {
        available.push(TimeRange::new_unchecked(last.end(), day_end));
    }

    available.sort();
    available
}
