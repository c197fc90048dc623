//! Split events into blocking ranges by attendee overlap.
//!
//! An event blocks a run when its attendee set intersects the attendees that
//! run cares about. One pass over the events fills both runs.

use std::collections::BTreeSet;

use crate::event::{Event, MeetingRequest};
use crate::time_range::TimeRange;

/// Blocking ranges for the two attendee sets a meeting query considers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockingRanges {
    /// Ranges that block a required or an optional attendee.
    pub everyone: Vec<TimeRange>,
    /// Ranges that block a required attendee.
    pub required: Vec<TimeRange>,
}

/// Collect the ranges of every event that involves an attendee of `request`.
///
/// An event with attendees in both categories is counted in both runs.
pub fn collect_blocking_ranges(events: &[Event], request: &MeetingRequest) -> BlockingRanges {
    let mut ranges = BlockingRanges::default();

    for event in events {
        let blocks_required = shares_attendee(&event.attendees, request.attendees());
        if blocks_required {
            ranges.required.push(event.when);
        }
        if blocks_required || shares_attendee(&event.attendees, request.optional_attendees()) {
            ranges.everyone.push(event.when);
        }
    }

    ranges
}

fn shares_attendee(event_attendees: &BTreeSet<String>, wanted: &BTreeSet<String>) -> bool {
    !event_attendees.is_disjoint(wanted)
}
