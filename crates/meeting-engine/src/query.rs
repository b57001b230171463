//! Meeting query orchestration and the mandatory/optional combination policy.
//!
//! Runs the collect → merge → invert pipeline once for the mandatory
//! attendees and once for the optional attendees, then combines the two
//! candidate lists: prefer slots that also work for the optional attendees,
//! fall back to mandatory-only slots when none do.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::availability::available_ranges;
use crate::freebusy::{collect_busy_intervals, merge_busy_intervals};
use crate::model::{Event, MeetingRequest};
use crate::range::TimeRange;

/// How mandatory and optional candidate lists are combined when both are
/// non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombinationMode {
    /// Legacy pair-loop behavior: a mandatory range is emitted once per
    /// optional range it overlaps or contains — duplicates are not
    /// suppressed, and the emitted range is not intersected with the optional
    /// range, so it may extend past where the optional attendee is free.
    /// Kept as the default for output compatibility with existing consumers.
    #[default]
    Compatible,
    /// Deduplicated intersections of mandatory and optional ranges that are
    /// long enough for the request, falling back to the mandatory-only list
    /// when no intersection qualifies.
    Corrected,
}

/// Find every slot in the day where the requested meeting can take place.
///
/// Uses [`CombinationMode::Compatible`]; see [`query_with_mode`] for the
/// corrected combination policy.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_with_mode(events, request, CombinationMode::Compatible)
}

/// Find every slot in the day where the requested meeting can take place,
/// with an explicit combination policy.
///
/// The pipeline runs twice — once against the mandatory attendees, once
/// against the optional attendees. With no mandatory attendees the optional
/// candidates are returned unchanged; with no optional candidates the
/// mandatory ones are. Otherwise the two lists are combined per `mode`.
/// The result is sorted by end minute.
pub fn query_with_mode(
    events: &[Event],
    request: &MeetingRequest,
    mode: CombinationMode,
) -> Vec<TimeRange> {
    let mandatory_available = available_times(events, request, &request.mandatory_attendees);
    let optional_available = available_times(events, request, &request.optional_attendees);

    if request.mandatory_attendees.is_empty() {
        return optional_available;
    }
    if optional_available.is_empty() {
        return mandatory_available;
    }

    match mode {
        CombinationMode::Compatible => {
            combine_compatible(&mandatory_available, &optional_available, request)
        }
        CombinationMode::Corrected => {
            combine_corrected(mandatory_available, &optional_available, request)
        }
    }
}

/// First slot that fits the request, or `None` when nothing does.
pub fn first_fit(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    query(events, request).into_iter().next()
}

/// Collect → merge → invert for one attendee subset.
fn available_times(
    events: &[Event],
    request: &MeetingRequest,
    attendees: &HashSet<String>,
) -> Vec<TimeRange> {
    let busy = collect_busy_intervals(events, attendees);
    let blocks = merge_busy_intervals(busy);
    available_ranges(&blocks, request.duration_minutes)
}

/// Literal legacy pair loop: emit the mandatory range for every optional
/// range it overlaps or contains, provided the optional range itself is long
/// enough for the request.
fn combine_compatible(
    mandatory_available: &[TimeRange],
    optional_available: &[TimeRange],
    request: &MeetingRequest,
) -> Vec<TimeRange> {
    let mut combined = Vec::new();
    for optional_range in optional_available {
        for mandatory_range in mandatory_available {
            if i64::from(optional_range.duration()) >= request.duration_minutes
                && (mandatory_range.contains(*optional_range)
                    || mandatory_range.overlaps(*optional_range))
            {
                combined.push(*mandatory_range);
            }
        }
    }
    combined.sort();
    combined
}

/// Corrected policy: emit each distinct mandatory ∩ optional intersection
/// that is long enough for the request; when none is, fall back to the
/// mandatory-only candidates rather than returning nothing.
fn combine_corrected(
    mandatory_available: Vec<TimeRange>,
    optional_available: &[TimeRange],
    request: &MeetingRequest,
) -> Vec<TimeRange> {
    let mut combined: Vec<TimeRange> = Vec::new();
    for mandatory_range in &mandatory_available {
        for optional_range in optional_available {
            if let Some(shared) = mandatory_range.intersection(*optional_range) {
                if i64::from(shared.duration()) >= request.duration_minutes
                    && !combined.contains(&shared)
                {
                    combined.push(shared);
                }
            }
        }
    }

    if combined.is_empty() {
        return mandatory_available;
    }
    combined.sort();
    combined
}
