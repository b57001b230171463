//! Calendar event and meeting request value types.
//!
//! Both are built by the caller (the transport/storage layer excluded from
//! this crate) and never mutated by the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::range::TimeRange;

/// An existing calendar event occupying part of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Display title; not consulted by the availability algorithm.
    pub title: String,
    /// Attendees committed to this event. Order irrelevant, duplicates
    /// impossible.
    pub attendees: HashSet<String>,
    /// When the event occupies the day.
    pub when: TimeRange,
}

impl Event {
    pub fn new<T, A>(title: T, attendees: A, when: TimeRange) -> Self
    where
        T: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Event {
            title: title.into(),
            attendees: attendees.into_iter().map(Into::into).collect(),
            when,
        }
    }
}

/// A request for a meeting slot of a given length.
///
/// Mandatory attendees are a hard constraint; optional attendees are a soft
/// preference. The two sets may overlap — an attendee listed in both simply
/// has their busy intervals counted against each set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Requested meeting length in minutes. May exceed the day, in which
    /// case no slot can ever satisfy the request.
    pub duration_minutes: i64,
    /// Attendees who must be free for the whole returned slot.
    pub mandatory_attendees: HashSet<String>,
    /// Attendees whose availability is preferred but not required.
    pub optional_attendees: HashSet<String>,
}

impl MeetingRequest {
    /// Request with mandatory attendees only.
    pub fn new<A>(mandatory_attendees: A, duration_minutes: i64) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
    {
        MeetingRequest {
            duration_minutes,
            mandatory_attendees: mandatory_attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
        }
    }

    /// Add optional attendees to the request.
    pub fn with_optional_attendees<A>(mut self, optional_attendees: A) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
    {
        self.optional_attendees
            .extend(optional_attendees.into_iter().map(Into::into));
        self
    }
}
