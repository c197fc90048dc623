//! Meeting slot search with optional-attendee fallback.
//!
//! A query first looks for gaps that suit every attendee, optional ones
//! included. When none exist it retries with the required attendees alone,
//! ignoring conflicts that only involve optional attendees.
//!
//! Each call is a pure function of its inputs: nothing is cached or mutated,
//! so queries can run concurrently from any number of threads.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::blocking::collect_blocking_ranges;
use crate::event::{Event, MeetingRequest};
use crate::gaps::find_free_gaps;
use crate::time_range::TimeRange;

/// Which attendee set the returned slots were computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    /// Slots suit required and optional attendees alike.
    Everyone,
    /// No slot suited everyone; slots suit the required attendees only.
    /// With no required attendees this is the whole day.
    RequiredOnly,
    /// No feasible slot exists.
    Nobody,
}

/// Result of a meeting query, with the attendee set that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPlan {
    /// Free slots in chronological order, each at least as long as requested.
    pub slots: Vec<TimeRange>,
    pub attendance: Attendance,
}

/// Find the slots a meeting could take place in and report which attendees
/// they were computed for.
///
/// An empty plan (`Attendance::Nobody`) is a valid answer, not an error.
pub fn plan_meeting(events: &[Event], request: &MeetingRequest) -> MeetingPlan {
    let duration = request.duration();
    if duration > TimeRange::WHOLE_DAY.duration() {
        debug!(duration, "meeting longer than a day, no slot possible");
        return MeetingPlan {
            slots: Vec::new(),
            attendance: Attendance::Nobody,
        };
    }

    let blocking = collect_blocking_ranges(events, request);
    debug!(
        events = events.len(),
        blocking_everyone = blocking.everyone.len(),
        blocking_required = blocking.required.len(),
        "collected blocking ranges"
    );

    let slots = find_free_gaps(&blocking.everyone, duration);
    if !slots.is_empty() {
        debug!(slots = slots.len(), "found slots for every attendee");
        return MeetingPlan {
            slots,
            attendance: Attendance::Everyone,
        };
    }

    // Ignore conflicts that only involve optional attendees.
    let slots = find_free_gaps(&blocking.required, duration);
    if slots.is_empty() {
        debug!("no slot even for required attendees");
        MeetingPlan {
            slots,
            attendance: Attendance::Nobody,
        }
    } else {
        debug!(slots = slots.len(), "fell back to required attendees only");
        MeetingPlan {
            slots,
            attendance: Attendance::RequiredOnly,
        }
    }
}

/// Find the slots a meeting could take place in, in chronological order.
///
/// Shorthand for [`plan_meeting`] when the caller does not care whether
/// optional attendees were accommodated.
pub fn find_meeting_slots(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    plan_meeting(events, request).slots
}
