//! Half-open time intervals over the minute-of-day axis.
//!
//! A [`TimeRange`] covers `[start, end)` in minutes since midnight. The whole
//! day is `[0, 1440)`. Ranges are immutable `Copy` values; the `start <= end`
//! invariant is enforced at construction, so the algorithms never have to
//! guard against inverted intervals.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{MeetingError, Result};

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A half-open `[start, end)` interval in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    start: i32,
    end: i32,
}

impl TimeRange {
    /// The full day, `[0, 1440)` — the universe availability is computed
    /// against.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: 0,
        end: MINUTES_PER_DAY,
    };

    /// Create a range from an inclusive start and an exclusive end.
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidRange`] when `start > end`. Minutes
    /// outside `[0, 1440]` are accepted structurally; the engine itself only
    /// ever produces in-bounds values.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(MeetingError::InvalidRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Create a range from explicit endpoints. When `inclusive_end` is set,
    /// the stored exclusive end is one minute past the given end.
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidRange`] when the resulting range would
    /// have `start > end`.
    pub fn from_start_end(start: i32, end: i32, inclusive_end: bool) -> Result<Self> {
        Self::new(start, if inclusive_end { end + 1 } else { end })
    }

    /// Create a range covering `duration` minutes from `start`.
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidRange`] when `duration` is negative.
    pub fn from_start_duration(start: i32, duration: i32) -> Result<Self> {
        Self::new(start, start + duration)
    }

    /// Create a range from clock times, truncated to whole minutes.
    ///
    /// `NaiveTime` cannot express 24:00, so a range ending at midnight must
    /// be built with [`TimeRange::new`] (or use [`TimeRange::WHOLE_DAY`]).
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidRange`] when `end` is before `start`.
    pub fn from_times(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        Self::new(minute_of_day(start), minute_of_day(end))
    }

    /// Invariant already established by the caller.
    pub(crate) const fn new_unchecked(start: i32, end: i32) -> Self {
        TimeRange { start, end }
    }

    /// Inclusive start minute.
    pub fn start(self) -> i32 {
        self.start
    }

    /// Exclusive end minute.
    pub fn end(self) -> i32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(self) -> i32 {
        self.end - self.start
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Adjacent ranges (one ends exactly when the other starts) do NOT
    /// overlap.
    pub fn overlaps(self, other: TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within `self`.
    pub fn contains(self, other: TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The shared portion of two ranges, or `None` when they do not overlap.
    pub fn intersection(self, other: TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(TimeRange::new_unchecked(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }

    /// Smallest range covering both inputs.
    pub(crate) fn span(self, other: TimeRange) -> TimeRange {
        TimeRange::new_unchecked(self.start.min(other.start), self.end.max(other.end))
    }
}

impl Ord for TimeRange {
    /// Orders by end minute, ties broken by start minute. Both the busy-block
    /// merge and the final result sort use this single ordering so tie-breaks
    /// stay consistent.
    fn cmp(&self, other: &Self) -> Ordering {
        self.end
            .cmp(&other.end)
            .then_with(|| self.start.cmp(&other.start))
    }
}

impl PartialOrd for TimeRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn minute_of_day(time: NaiveTime) -> i32 {
    (time.hour() * 60 + time.minute()) as i32
}
