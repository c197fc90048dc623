//! Calendar events and meeting requests: the two inputs of a meeting query.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};
use crate::time_range::TimeRange;

/// A pre-existing calendar entry.
///
/// An event with no attendees never blocks any request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// When the event takes place.
    pub when: TimeRange,
    /// Identifiers of everyone committed to this event.
    #[serde(default)]
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }
}

/// A request for a meeting of a given length.
///
/// Required and optional attendee sets are expected to be disjoint, but nothing
/// here enforces it; an identifier in both sets behaves as required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeetingRequest")]
pub struct MeetingRequest {
    duration: u32,
    attendees: BTreeSet<String>,
    optional_attendees: BTreeSet<String>,
}

impl MeetingRequest {
    /// Create a request with required attendees only.
    ///
    /// Returns [`MeetingError::InvalidDuration`] when `duration` is negative or
    /// does not fit in a `u32`.
    pub fn new<I, S>(attendees: I, duration: i64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let duration = u32::try_from(duration).map_err(|_| MeetingError::InvalidDuration(duration))?;
        Ok(Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        })
    }

    /// Add optional attendees to the request.
    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(optional.into_iter().map(Into::into));
        self
    }

    /// Requested meeting length in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Attendees whose availability is mandatory.
    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// Attendees who should be accommodated when possible.
    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }
}

#[derive(Deserialize)]
struct RawMeetingRequest {
    duration: i64,
    #[serde(default)]
    attendees: BTreeSet<String>,
    #[serde(default, alias = "optionalAttendees")]
    optional_attendees: BTreeSet<String>,
}

impl TryFrom<RawMeetingRequest> for MeetingRequest {
    type Error = MeetingError;

    fn try_from(raw: RawMeetingRequest) -> Result<Self> {
        Ok(MeetingRequest::new(raw.attendees, raw.duration)?
            .with_optional_attendees(raw.optional_attendees))
    }
}
