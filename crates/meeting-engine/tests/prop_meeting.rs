//! Property-based tests for meeting slot search using proptest.
//!
//! These check invariants that must hold for *any* calendar and request, not
//! just the hand-picked scenarios in `meeting_tests.rs`.

use proptest::prelude::*;

use meeting_engine::{
    plan_meeting, Attendance, Event, MeetingRequest, TimeRange, END_OF_DAY,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const PEOPLE: [&str; 5] = ["ada", "bob", "cy", "dee", "eve"];

fn arb_range() -> impl Strategy<Value = TimeRange> {
    (0u32..=END_OF_DAY, 0u32..=240).prop_map(|(start, len)| {
        let end = (start + len).min(END_OF_DAY);
        TimeRange::from_start_end(start, end, false).unwrap()
    })
}

fn arb_people() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(PEOPLE.to_vec(), 0..=3)
        .prop_map(|people| people.into_iter().map(String::from).collect())
}

fn arb_event() -> impl Strategy<Value = Event> {
    (arb_range(), arb_people()).prop_map(|(when, attendees)| Event::new(when, attendees))
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    proptest::collection::vec(arb_event(), 0..20)
}

fn arb_request() -> impl Strategy<Value = MeetingRequest> {
    (arb_people(), arb_people(), 0i64..=1500).prop_map(|(required, optional, duration)| {
        MeetingRequest::new(required, duration)
            .unwrap()
            .with_optional_attendees(optional)
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

/// Ranges of the events that block the attendee set a plan was computed for.
fn blocking_for(events: &[Event], request: &MeetingRequest, attendance: Attendance) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|e| {
            let required = !e.attendees.is_disjoint(request.attendees());
            let optional = !e.attendees.is_disjoint(request.optional_attendees());
            match attendance {
                Attendance::Everyone => required || optional,
                Attendance::RequiredOnly => required,
                Attendance::Nobody => false,
            }
        })
        .map(|e| e.when)
        .collect()
}

// ---------------------------------------------------------------------------
// Property 1: Every slot is long enough
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_are_long_enough(events in arb_events(), request in arb_request()) {
        let plan = plan_meeting(&events, &request);
        for slot in &plan.slots {
            prop_assert!(
                slot.duration() >= request.duration(),
                "slot {} shorter than {} minutes",
                slot,
                request.duration()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Slots are sorted and pairwise disjoint
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_are_sorted_and_disjoint(events in arb_events(), request in arb_request()) {
        let plan = plan_meeting(&events, &request);
        for pair in plan.slots.windows(2) {
            prop_assert!(
                pair[0].end() <= pair[1].start(),
                "slots out of order or overlapping: {} then {}",
                pair[0],
                pair[1]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: No slot overlaps an event of the attendee set actually used
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_avoid_blocking_events(events in arb_events(), request in arb_request()) {
        let plan = plan_meeting(&events, &request);
        let blocking = blocking_for(&events, &request, plan.attendance);
        for slot in &plan.slots {
            for busy in &blocking {
                prop_assert!(
                    busy.is_empty() || !slot.overlaps(busy),
                    "slot {} overlaps blocking range {}",
                    slot,
                    busy
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Attendance agrees with the slot list
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn attendance_matches_slots(events in arb_events(), request in arb_request()) {
        let plan = plan_meeting(&events, &request);
        prop_assert_eq!(plan.slots.is_empty(), plan.attendance == Attendance::Nobody);
        if request.duration() > END_OF_DAY {
            prop_assert!(plan.slots.is_empty());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Same inputs, same output
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn query_is_deterministic(events in arb_events(), request in arb_request()) {
        let first = plan_meeting(&events, &request);
        let mut reversed = events.clone();
        reversed.reverse();
        let second = plan_meeting(&reversed, &request);
        prop_assert_eq!(first, second);
    }
}
