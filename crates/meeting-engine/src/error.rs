//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    /// A time range was constructed with its start after its end.
    #[error("invalid time range: start {start} is after end {end}")]
    InvalidRange { start: i32, end: i32 },
}

/// Convenience alias used throughout meeting-engine.
pub type Result<T> = std::result::Result<T, MeetingError>;
