//! Busy-interval collection and merging.
//!
//! Collects the intervals during which any targeted attendee is committed to
//! an event, then sorts and coalesces them into maximal disjoint busy blocks.

use std::collections::HashSet;

use crate::model::Event;
use crate::range::TimeRange;

/// Collect every interval during which a targeted attendee is busy.
///
/// Emits one interval per (event, attendee-in-target-set) pair, so an event
/// shared by several targeted attendees contributes its interval once per
/// attendee. Duplicates are harmless: [`merge_busy_intervals`] coalesces
/// them.
pub fn collect_busy_intervals(events: &[Event], attendees: &HashSet<String>) -> Vec<TimeRange> {
    let mut busy = Vec::new();
    for attendee in attendees {
        for event in events {
            if event.attendees.contains(attendee) {
                busy.push(event.when);
            }
        }
    }
    busy
}

/// Merge busy intervals into maximal disjoint blocks.
///
/// Sorts by end minute (ties by start minute), then sweeps with an
/// accumulator of disjoint blocks: an incoming interval that overlaps,
/// touches, or is contained by the last block widens it to
/// `[min(starts), max(ends))`, and the widened block keeps absorbing earlier
/// blocks it now reaches. The result is ascending, pairwise-disjoint, and
/// non-adjacent; merging it again yields the same sequence.
pub fn merge_busy_intervals(mut intervals: Vec<TimeRange>) -> Vec<TimeRange> {
    intervals.sort();

    let mut merged: Vec<TimeRange> = Vec::new();
    for range in intervals {
        let mut block = range;
        // After the end-minute sort, overlap/touch/containment against an
        // accumulated block all reduce to this one comparison. A wide
        // interval starting early can reach past several blocks, so keep
        // absorbing until the block stands clear.
        while let Some(last) = merged.last() {
            if block.start() > last.end() {
                break;
            }
            block = last.span(block);
            merged.pop();
        }
        merged.push(block);
    }
    merged
}
