//! WASM bindings for meeting-engine.
//!
//! Exposes meeting slot search and free-gap computation to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! ```

use meeting_engine::clock;
use meeting_engine::{Attendance, Event, MeetingRequest, TimeRange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SlotDto {
    start: u32,
    end: u32,
    duration_minutes: u32,
    /// `HH:MM-HH:MM` rendering for display.
    label: String,
}

impl From<&TimeRange> for SlotDto {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: r.start(),
            end: r.end(),
            duration_minutes: r.duration(),
            label: clock::format_range(r),
        }
    }
}

#[derive(Serialize)]
struct PlanDto {
    slots: Vec<SlotDto>,
    attendance: Attendance,
}

fn js_error(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    serde_json::from_str(json).map_err(|e| js_error("Invalid events JSON", e))
}

fn parse_request_json(json: &str) -> Result<MeetingRequest, JsValue> {
    serde_json::from_str(json).map_err(|e| js_error("Invalid request JSON", e))
}

/// Parse busy ranges given either as `{start, end}` minutes or as
/// `"HH:MM-HH:MM"` strings. Each item is dispatched on its JSON shape so that
/// validation errors reach the caller unchanged.
///
/// Errors stay plain strings here and become `JsValue`s at the export.
fn parse_ranges_json(json: &str) -> Result<Vec<TimeRange>, String> {
    let items: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| format!("Invalid ranges JSON: {}", e))?;

    items.into_iter().map(parse_range_value).collect()
}

fn parse_range_value(item: serde_json::Value) -> Result<TimeRange, String> {
    match item {
        serde_json::Value::String(text) => {
            clock::parse_range(&text).map_err(|e| format!("Invalid range: {}", e))
        }
        object @ serde_json::Value::Object(_) => {
            serde_json::from_value(object).map_err(|e| format!("Invalid range: {}", e))
        }
        other => Err(format!(
            "Invalid range: expected {{start, end}} or \"HH:MM-HH:MM\", got {}",
            other
        )),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error("Serialization error", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find the slots a meeting can take place in.
///
/// `events_json` is a JSON array of `{when: {start, end}, attendees}` objects and
/// `request_json` a `{duration, attendees, optional_attendees}` object. Returns a
/// JSON array of `{start, end, duration_minutes, label}` objects.
#[wasm_bindgen(js_name = "findMeetingSlots")]
pub fn find_meeting_slots(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;

    let slots = meeting_engine::find_meeting_slots(&events, &request);
    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    to_json(&dtos)
}

/// Like [`find_meeting_slots`], but also reports whether the slots suit every
/// attendee (`"everyone"`), only the required ones (`"required_only"`), or
/// nobody (`"nobody"`).
#[wasm_bindgen(js_name = "planMeeting")]
pub fn plan_meeting(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;

    let plan = meeting_engine::plan_meeting(&events, &request);
    to_json(&PlanDto {
        slots: plan.slots.iter().map(SlotDto::from).collect(),
        attendance: plan.attendance,
    })
}

/// Find free gaps of at least `min_duration` minutes around busy ranges.
///
/// `busy_json` is a JSON array whose items are `{start, end}` objects or
/// `"HH:MM-HH:MM"` strings.
#[wasm_bindgen(js_name = "findFreeGaps")]
pub fn find_free_gaps(busy_json: &str, min_duration: u32) -> Result<String, JsValue> {
    let busy = parse_ranges_json(busy_json).map_err(|e| JsValue::from_str(&e))?;
    let gaps = meeting_engine::find_free_gaps(&busy, min_duration);
    let dtos: Vec<SlotDto> = gaps.iter().map(SlotDto::from).collect();
    to_json(&dtos)
}
