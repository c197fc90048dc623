//! Convert between minutes since midnight and `HH:MM` wall-clock strings.
//!
//! The end-of-day sentinel (minute 1440) is rendered and accepted as `24:00`,
//! which `chrono::NaiveTime` itself cannot represent.

use chrono::{NaiveTime, Timelike};

use crate::error::{MeetingError, Result};
use crate::time_range::{TimeRange, END_OF_DAY};

const END_OF_DAY_CLOCK: &str = "24:00";

/// Render a minute of the day as `HH:MM`.
///
/// Minutes past the end of the day have no wall-clock form and are rendered
/// as a plain minute count.
pub fn format_minute(minute: u32) -> String {
    if minute == END_OF_DAY {
        return END_OF_DAY_CLOCK.to_string();
    }
    match NaiveTime::from_hms_opt(minute / 60, minute % 60, 0) {
        Some(time) => time.format("%H:%M").to_string(),
        None => format!("{minute}min"),
    }
}

/// Parse an `HH:MM` string into minutes since midnight. `24:00` maps to 1440.
pub fn parse_minute(clock: &str) -> Result<u32> {
    let clock = clock.trim();
    if clock == END_OF_DAY_CLOCK {
        return Ok(END_OF_DAY);
    }
    let time = NaiveTime::parse_from_str(clock, "%H:%M")
        .map_err(|e| MeetingError::InvalidClock(format!("'{}': {}", clock, e)))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Render a range as `HH:MM-HH:MM`.
pub fn format_range(range: &TimeRange) -> String {
    format!("{}-{}", format_minute(range.start()), format_minute(range.end()))
}

/// Parse an `HH:MM-HH:MM` string into a validated range.
pub fn parse_range(text: &str) -> Result<TimeRange> {
    let (start, end) = text
        .split_once('-')
        .ok_or_else(|| MeetingError::InvalidClock(format!("'{}': expected HH:MM-HH:MM", text)))?;
    TimeRange::from_start_end(parse_minute(start)?, parse_minute(end)?, false)
}
