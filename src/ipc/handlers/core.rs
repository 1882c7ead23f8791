use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{catalog_json, sync_link};
use crate::ipc::types::{AppState, Request, Session};
use crate::share;
use crate::store;
use serde_json::json;
use std::path::PathBuf;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "workspacePath": state.workspace.as_ref().map(|p| p.to_string_lossy().to_string())
        }),
    )
}

fn handle_workspace_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);
    let Some(path) = p else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };

    let conn = match store::open_store(&path) {
        Ok(c) => c,
        Err(e) => return err(&req.id, "store_open_failed", format!("{e:?}"), None),
    };

    // Link hydration happens here, once per session: an incoming `selected`
    // parameter wholesale-replaces the selection; an absent parameter is an
    // empty selection.
    let selected = req.params.get(share::SELECTED_PARAM).and_then(|v| v.as_str());
    let mut session = Session {
        catalog: store::load_catalog(&conn),
        student_name: store::load_student_name(&conn),
        selection: share::decode(selected),
        admin: state.session.admin,
        ..Session::default()
    };
    sync_link(&mut session);

    state.workspace = Some(path.clone());
    state.db = Some(conn);
    state.session = session;

    ok(
        &req.id,
        json!({
            "workspacePath": path.to_string_lossy(),
            "studentName": state.session.student_name,
            "selectedIds": state.session.selection.ids(),
            "link": state.session.link,
            "courses": catalog_json(&state.session.catalog),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "workspace.select" => Some(handle_workspace_select(state, req)),
        _ => None,
    }
}
