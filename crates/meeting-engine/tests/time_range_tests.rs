//! Tests for `TimeRange` construction, predicates, and ordering.

use meeting_engine::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};
use meeting_engine::MeetingError;

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn whole_day_spans_midnight_to_midnight() {
    assert_eq!(TimeRange::WHOLE_DAY.start(), START_OF_DAY);
    assert_eq!(TimeRange::WHOLE_DAY.end(), 1440);
    assert_eq!(TimeRange::WHOLE_DAY.duration(), 1440);
}

#[test]
fn inclusive_of_day_end_pins_end_to_sentinel() {
    // Whatever raw end is passed, the range must reach midnight exactly.
    let r = TimeRange::from_start_end(900, 1439, true).unwrap();
    assert_eq!(r.end(), END_OF_DAY);
    assert_eq!(r.duration(), 540);

    let r = TimeRange::from_start_end(900, 0, true).unwrap();
    assert_eq!(r.end(), END_OF_DAY);
}

#[test]
fn start_after_end_is_rejected() {
    let err = TimeRange::from_start_end(120, 60, false).unwrap_err();
    assert_eq!(err, MeetingError::InvalidRange { start: 120, end: 60 });
}

#[test]
fn end_past_end_of_day_is_rejected() {
    let err = TimeRange::from_start_end(0, 1441, false).unwrap_err();
    assert!(matches!(err, MeetingError::InvalidRange { end: 1441, .. }));
}

#[test]
fn empty_range_is_valid() {
    let r = range(600, 600);
    assert!(r.is_empty());
    assert_eq!(r.duration(), 0);
}

#[test]
fn from_start_duration_computes_end() {
    let r = TimeRange::from_start_duration(540, 30).unwrap();
    assert_eq!(r, range(540, 570));
    assert!(TimeRange::from_start_duration(1430, 30).is_err());
}

// ── Predicates ──────────────────────────────────────────────────────────────

#[test]
fn contains_is_half_open() {
    let r = range(60, 120);
    assert!(r.contains(60));
    assert!(r.contains(119));
    assert!(!r.contains(120));
    assert!(!r.contains(59));
}

#[test]
fn contains_range_checks_both_bounds() {
    let outer = range(60, 240);
    assert!(outer.contains_range(&range(60, 240)));
    assert!(outer.contains_range(&range(90, 120)));
    assert!(!outer.contains_range(&range(30, 120)));
    assert!(!outer.contains_range(&range(200, 300)));
}

#[test]
fn adjacent_ranges_do_not_overlap() {
    let a = range(60, 120);
    let b = range(120, 180);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn overlapping_ranges_overlap_both_ways() {
    let a = range(60, 120);
    let b = range(100, 180);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn nested_range_overlaps_outer() {
    assert!(range(0, 1440).overlaps(&range(300, 400)));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn order_by_start_breaks_ties_by_end() {
    let mut ranges = vec![range(60, 180), range(0, 30), range(60, 90)];
    ranges.sort_by(TimeRange::order_by_start);
    assert_eq!(ranges, vec![range(0, 30), range(60, 90), range(60, 180)]);
}

#[test]
fn derived_ord_matches_order_by_start() {
    let mut by_cmp = vec![range(300, 400), range(60, 180), range(60, 90)];
    let mut by_ord = by_cmp.clone();
    by_cmp.sort_by(TimeRange::order_by_start);
    by_ord.sort();
    assert_eq!(by_cmp, by_ord);
}

#[test]
fn order_by_end_breaks_ties_by_start() {
    let mut ranges = vec![range(30, 120), range(0, 200), range(60, 120)];
    ranges.sort_by(TimeRange::order_by_end);
    assert_eq!(ranges, vec![range(30, 120), range(60, 120), range(0, 200)]);
}

// ── Serde ───────────────────────────────────────────────────────────────────

#[test]
fn serializes_as_start_end_object() {
    let json = serde_json::to_string(&range(60, 120)).unwrap();
    assert_eq!(json, r#"{"start":60,"end":120}"#);
}

#[test]
fn deserialization_validates_bounds() {
    let ok: TimeRange = serde_json::from_str(r#"{"start":0,"end":1440}"#).unwrap();
    assert_eq!(ok, TimeRange::WHOLE_DAY);

    let reversed = serde_json::from_str::<TimeRange>(r#"{"start":120,"end":60}"#);
    assert!(reversed.is_err());

    let negative = serde_json::from_str::<TimeRange>(r#"{"start":-5,"end":60}"#);
    assert!(negative.unwrap_err().to_string().contains("Invalid time range"));
}

#[test]
fn display_shows_half_open_interval() {
    assert_eq!(range(60, 120).to_string(), "[60, 120)");
}
