//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    #[error("Invalid time range: start {start} and end {end} must satisfy 0 <= start <= end <= 1440")]
    InvalidRange { start: i64, end: i64 },

    #[error("Invalid meeting duration: {0} (must be between 0 and {max} minutes)", max = u32::MAX)]
    InvalidDuration(i64),

    #[error("Invalid clock time: {0}")]
    InvalidClock(String),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
