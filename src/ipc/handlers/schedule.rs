use crate::grouper::group_schedule;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::course_json;
use crate::ipc::types::{AppState, Request};
use crate::store;
use serde_json::json;

fn handle_schedule_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let groups = group_schedule(&state.session.catalog, &state.session.selection);
    let days: Vec<serde_json::Value> = groups
        .iter()
        .map(|g| {
            json!({
                "day": g.day.label(),
                "courses": g.courses.iter().map(course_json).collect::<Vec<_>>(),
            })
        })
        .collect();

    ok(
        &req.id,
        json!({
            "studentName": state.session.student_name,
            "days": days,
        }),
    )
}

fn handle_student_name_set(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(name) = req.params.get("name").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing name", None);
    };

    // Memory first: a failed persist loses durability, never the live name.
    state.session.student_name = name.to_string();

    if let Some(conn) = state.db.as_ref() {
        if let Err(e) = store::save_student_name(conn, name) {
            return err(&req.id, "store_write_failed", e.to_string(), None);
        }
    }

    ok(&req.id, json!({ "studentName": state.session.student_name }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "schedule.get" => Some(handle_schedule_get(state, req)),
        "student.name.set" => Some(handle_student_name_set(state, req)),
        _ => None,
    }
}
