use crate::filter::{FilterState, ALL_SENTINEL};
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{catalog_json, filtered_view_json};
use crate::ipc::types::{AppState, Request};
use crate::model::{Day, GradeLevel, TimeSlot};
use serde_json::json;

/// Absent, null, or the "הכל" sentinel all mean "match all" on an axis;
/// anything else must be a known enum label.
fn parse_axis<T>(
    params: &serde_json::Value,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, String> {
    match params.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(v) => {
            let Some(s) = v.as_str() else {
                return Err(format!("{key} must be a string"));
            };
            if s == ALL_SENTINEL {
                return Ok(None);
            }
            parse(s)
                .map(Some)
                .ok_or_else(|| format!("unknown {key}: {s}"))
        }
    }
}

fn handle_filters_set(state: &mut AppState, req: &Request) -> serde_json::Value {
    let day = match parse_axis(&req.params, "day", Day::from_label) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let time_slot = match parse_axis(&req.params, "timeSlot", TimeSlot::from_label) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let grade_level = match parse_axis(&req.params, "gradeLevel", GradeLevel::from_label) {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let search = req
        .params
        .get("search")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    state.session.filters = FilterState {
        day,
        time_slot,
        grade_level,
        search,
    };

    ok(
        &req.id,
        json!({ "courses": filtered_view_json(&state.session) }),
    )
}

fn handle_courses_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({ "courses": filtered_view_json(&state.session) }),
    )
}

fn handle_catalog_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({ "courses": catalog_json(&state.session.catalog) }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "filters.set" => Some(handle_filters_set(state, req)),
        "courses.list" => Some(handle_courses_list(state, req)),
        "catalog.list" => Some(handle_catalog_list(state, req)),
        _ => None,
    }
}
