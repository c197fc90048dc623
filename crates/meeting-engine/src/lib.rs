//! # meeting-engine
//!
//! Find the times of day a meeting can take place, given the events already on
//! everyone's calendar.
//!
//! A query names required and optional attendees and a duration. The engine
//! prefers slots that suit every attendee and falls back to slots that suit the
//! required attendees alone when optional attendees' conflicts leave no room.
//!
//! ## Modules
//!
//! - [`time_range`] — Half-open minute ranges within a day
//! - [`event`] — Calendar events and meeting requests
//! - [`blocking`] — Select the events that block each attendee set
//! - [`gaps`] — Sweep blocking ranges into free gaps
//! - [`meeting`] — Slot search with optional-attendee fallback
//! - [`clock`] — `HH:MM` rendering and parsing
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```rust
//! use meeting_engine::{find_meeting_slots, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(TimeRange::from_start_end(60, 120, false).unwrap(), ["A"])];
//! let request = MeetingRequest::new(["A"], 30).unwrap();
//!
//! let slots = find_meeting_slots(&events, &request);
//! assert_eq!(slots[0], TimeRange::from_start_end(0, 60, false).unwrap());
//! assert_eq!(slots[1], TimeRange::from_start_end(120, 1440, true).unwrap());
//! ```

pub mod blocking;
pub mod clock;
pub mod error;
pub mod event;
pub mod gaps;
pub mod meeting;
pub mod time_range;

pub use error::MeetingError;
pub use event::{Event, MeetingRequest};
pub use gaps::find_free_gaps;
pub use meeting::{find_meeting_slots, plan_meeting, Attendance, MeetingPlan};
pub use time_range::{TimeRange, END_OF_DAY, START_OF_DAY};
