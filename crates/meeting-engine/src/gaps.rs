//! Compute free gaps of the day around a set of blocking ranges.
//!
//! Sorts the blocking ranges by start, sweeps them left to right while tracking
//! the furthest end seen so far, and reports every gap between that frontier and
//! the next range that is long enough for the meeting.

use tracing::trace;

use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Find every free gap of at least `min_duration` minutes within the day.
///
/// Blocking ranges may overlap, nest, or arrive in any order. Gaps come back
/// sorted by start and never overlap each other or any blocking range.
/// Zero-width gaps are never reported, so a `min_duration` of 0 still only
/// yields real free time.
pub fn find_free_gaps(blocking: &[TimeRange], min_duration: u32) -> Vec<TimeRange> {
    if min_duration > END_OF_DAY {
        return Vec::new();
    }

    if blocking.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    let mut sorted = blocking.to_vec();
    sorted.sort_by(TimeRange::order_by_start);

    let mut gaps = Vec::new();
    let mut frontier = START_OF_DAY;

    for range in &sorted {
        // A range starting at or before the frontier leaves no gap.
        if range.start() > frontier && range.start() - frontier >= min_duration {
            let gap = TimeRange::spanning(frontier, range.start());
            trace!(%gap, "free gap");
            gaps.push(gap);
        }
        frontier = frontier.max(range.end());
    }

    // Trailing gap after the last blocking range.
    if frontier < END_OF_DAY && END_OF_DAY - frontier >= min_duration {
        let gap = TimeRange::spanning(frontier, END_OF_DAY);
        trace!(%gap, "trailing free gap");
        gaps.push(gap);
    }

    gaps
}
