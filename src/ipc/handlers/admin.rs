use crate::ipc::error::{err, ok};
use crate::ipc::helpers::course_json;
use crate::ipc::types::{AppState, Request};
use crate::model::{mint_course_id, Course, Day, GradeLevel, TimeSlot};
use crate::store;
use serde::Deserialize;
use serde_json::json;

const DEFAULT_ADMIN_PASSWORD: &str = "timetable-admin";

fn admin_password() -> String {
    std::env::var("TIMETABLED_ADMIN_PASSWORD")
        .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string())
}

/// Wire form of an admin save: with `id` it edits in place, without it a
/// fresh id is minted. Enum fields arrive as their Hebrew labels.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoursePayload {
    id: Option<i64>,
    name: String,
    #[serde(default)]
    details: String,
    day: Day,
    time_slot: TimeSlot,
    grade_level: GradeLevel,
}

fn require_admin(state: &AppState, req: &Request) -> Option<serde_json::Value> {
    if state.session.admin {
        None
    } else {
        Some(err(&req.id, "not_authorized", "admin login required", None))
    }
}

fn handle_admin_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(password) = req.params.get("password").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing password", None);
    };
    if password != admin_password() {
        return err(&req.id, "invalid_password", "wrong password", None);
    }
    state.session.admin = true;
    ok(&req.id, json!({ "admin": true }))
}

fn handle_admin_logout(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.session.admin = false;
    ok(&req.id, json!({ "admin": false }))
}

fn handle_catalog_save(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Some(resp) = require_admin(state, req) {
        return resp;
    }
    let Some(raw) = req.params.get("course") else {
        return err(&req.id, "bad_params", "missing course", None);
    };
    let payload: CoursePayload = match serde_json::from_value(raw.clone()) {
        Ok(p) => p,
        Err(e) => {
            return err(
                &req.id,
                "bad_params",
                e.to_string(),
                Some(json!({ "param": "course" })),
            )
        }
    };
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return err(&req.id, "bad_params", "name must not be empty", None);
    }

    let saved = match payload.id {
        Some(id) => {
            // Edit keeps identity and catalog position.
            let Some(existing) = state.session.catalog.iter_mut().find(|c| c.id == id) else {
                return err(&req.id, "not_found", "course not found", None);
            };
            existing.name = name;
            existing.details = payload.details;
            existing.day = payload.day;
            existing.time_slot = payload.time_slot;
            existing.grade_level = payload.grade_level;
            existing.clone()
        }
        None => {
            let course = Course {
                id: mint_course_id(&state.session.catalog),
                name,
                details: payload.details,
                day: payload.day,
                time_slot: payload.time_slot,
                grade_level: payload.grade_level,
            };
            state.session.catalog.push(course.clone());
            course
        }
    };

    ok(&req.id, json!({ "course": course_json(&saved) }))
}

fn handle_catalog_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Some(resp) = require_admin(state, req) {
        return resp;
    }
    let Some(course_id) = req.params.get("courseId").and_then(|v| v.as_i64()) else {
        return err(&req.id, "bad_params", "missing courseId", None);
    };
    if !state.session.catalog.iter().any(|c| c.id == course_id) {
        return err(&req.id, "not_found", "course not found", None);
    }

    // Any selection entry pointing at the removed course goes dangling; the
    // grouper tolerates that, so the selection is left untouched.
    state.session.catalog.retain(|c| c.id != course_id);
    ok(&req.id, json!({ "ok": true }))
}

fn handle_catalog_publish(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Some(resp) = require_admin(state, req) {
        return resp;
    }
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };

    if let Err(e) = store::save_catalog(conn, &state.session.catalog) {
        return err(&req.id, "store_write_failed", e.to_string(), None);
    }
    ok(
        &req.id,
        json!({ "courseCount": state.session.catalog.len() }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "admin.login" => Some(handle_admin_login(state, req)),
        "admin.logout" => Some(handle_admin_logout(state, req)),
        "catalog.save" => Some(handle_catalog_save(state, req)),
        "catalog.delete" => Some(handle_catalog_delete(state, req)),
        "catalog.publish" => Some(handle_catalog_publish(state, req)),
        _ => None,
    }
}
