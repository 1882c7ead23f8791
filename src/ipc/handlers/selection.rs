use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{selection_json, sync_link};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_selection_toggle(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(course_id) = req.params.get("courseId").and_then(|v| v.as_i64()) else {
        return err(&req.id, "bad_params", "missing courseId", None);
    };

    let selected = state.session.selection.toggle(course_id);
    let link_changed = sync_link(&mut state.session);

    let mut result = selection_json(&state.session, link_changed);
    result["selected"] = json!(selected);
    ok(&req.id, result)
}

fn handle_selection_replace(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(ids) = req.params.get("courseIds").and_then(|v| v.as_array()) else {
        return err(&req.id, "bad_params", "missing courseIds", None);
    };

    // Non-integer entries are dropped, mirroring link decoding.
    state
        .session
        .selection
        .replace_all(ids.iter().filter_map(|v| v.as_i64()));
    let link_changed = sync_link(&mut state.session);

    ok(&req.id, selection_json(&state.session, link_changed))
}

fn handle_selection_clear(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.session.selection.clear();
    let link_changed = sync_link(&mut state.session);
    ok(&req.id, selection_json(&state.session, link_changed))
}

fn handle_selection_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, selection_json(&state.session, false))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "selection.toggle" => Some(handle_selection_toggle(state, req)),
        "selection.replace" => Some(handle_selection_replace(state, req)),
        "selection.clear" => Some(handle_selection_clear(state, req)),
        "selection.get" => Some(handle_selection_get(state, req)),
        _ => None,
    }
}
