//! Half-open minute ranges within a single day.
//!
//! A [`TimeRange`] covers `[start, end)` measured in minutes since midnight.
//! Values are validated on construction and never change afterwards, so every
//! range seen by the rest of the crate satisfies `start <= end <= END_OF_DAY`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// End-of-day sentinel: one past the last minute (23:59).
pub const END_OF_DAY: u32 = 24 * 60;

/// An immutable half-open interval `[start, end)` in minutes since midnight.
///
/// The derived ordering sorts by `start`, then by `end`, which is the order the
/// gap scan consumes blocking ranges in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
    };

    /// Build a range from its bounds.
    ///
    /// When `inclusive_of_day_end` is set the stored end is pinned to
    /// [`END_OF_DAY`] whatever `end` was passed, so trailing gaps always reach
    /// midnight exactly.
    pub fn from_start_end(start: u32, end: u32, inclusive_of_day_end: bool) -> Result<Self> {
        let end = if inclusive_of_day_end { END_OF_DAY } else { end };
        if start > end || end > END_OF_DAY {
            return Err(MeetingError::InvalidRange {
                start: i64::from(start),
                end: i64::from(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Build a range starting at `start` and lasting `duration` minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start
            .checked_add(duration)
            .ok_or(MeetingError::InvalidRange {
                start: i64::from(start),
                end: i64::from(start) + i64::from(duration),
            })?;
        Self::from_start_end(start, end, false)
    }

    /// Construct a range whose bounds the caller has already checked.
    pub(crate) const fn spanning(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= END_OF_DAY);
        Self { start, end }
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Length in minutes. Never negative.
    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `minute` falls in `[start, end)`.
    pub const fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub const fn contains_range(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Two ranges overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Adjacent ranges, where one ends exactly when the other starts, do not overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Comparator sorting ascending by start, ties broken by end.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start).then(a.end.cmp(&b.end))
    }

    /// Comparator sorting ascending by end, ties broken by start.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end).then(a.start.cmp(&b.start))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Unvalidated wire shape. Signed so that negative bounds are reported as
/// [`MeetingError::InvalidRange`] instead of a generic parse failure.
#[derive(Deserialize)]
struct RawTimeRange {
    start: i64,
    end: i64,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = MeetingError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        let invalid = MeetingError::InvalidRange {
            start: raw.start,
            end: raw.end,
        };
        let start = u32::try_from(raw.start).map_err(|_| invalid.clone())?;
        let end = u32::try_from(raw.end).map_err(|_| invalid)?;
        TimeRange::from_start_end(start, end, false)
    }
}
