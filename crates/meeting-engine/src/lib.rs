//! # meeting-engine
//!
//! Pure, in-memory meeting-availability engine over a single-day minute axis.
//!
//! Given the day's existing calendar events and a meeting request (duration,
//! mandatory attendees, optional attendees), the engine returns every
//! interval of the day during which all mandatory attendees are free,
//! preferring intervals that also work for the optional attendees. The day is
//! the integer minute axis `[0, 1440)` — no recurrence, no multi-day ranges,
//! no timezones. Transport, storage, and session concerns live in the caller.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! // Alice has a 09:00-10:00 standup already on the books.
//! let events = vec![Event::new(
//!     "standup",
//!     ["alice"],
//!     TimeRange::new(9 * 60, 10 * 60).unwrap(),
//! )];
//!
//! // Find every slot for a 30-minute meeting with Alice.
//! let request = MeetingRequest::new(["alice"], 30);
//! let open = query(&events, &request);
//!
//! assert_eq!(open, vec![
//!     TimeRange::new(0, 9 * 60).unwrap(),
//!     TimeRange::new(10 * 60, 1440).unwrap(),
//! ]);
//! ```
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange`, the half-open minute interval value type
//! - [`model`] — `Event` and `MeetingRequest` inputs
//! - [`freebusy`] — busy-interval collection and merging
//! - [`availability`] — gap inversion against the whole-day bound
//! - [`query`] — orchestration and the mandatory/optional combination policy
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod freebusy;
pub mod model;
pub mod query;
pub mod range;

pub use error::MeetingError;
pub use model::{Event, MeetingRequest};
pub use query::{first_fit, query, query_with_mode, CombinationMode};
pub use range::{TimeRange, MINUTES_PER_DAY};
