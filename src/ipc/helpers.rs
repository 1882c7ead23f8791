use serde_json::json;

use crate::filter::filter_courses;
use crate::ipc::types::Session;
use crate::model::Course;
use crate::share;

pub fn course_json(c: &Course) -> serde_json::Value {
    json!({
        "id": c.id,
        "name": c.name,
        "details": c.details,
        "day": c.day.label(),
        "timeSlot": c.time_slot.label(),
        "hours": c.time_slot.hours(),
        "gradeLevel": c.grade_level.label(),
    })
}

pub fn catalog_json(catalog: &[Course]) -> serde_json::Value {
    json!(catalog.iter().map(course_json).collect::<Vec<_>>())
}

pub fn filtered_view_json(session: &Session) -> serde_json::Value {
    json!(filter_courses(&session.catalog, &session.filters)
        .into_iter()
        .map(course_json)
        .collect::<Vec<_>>())
}

/// Exactly one re-encode / compare / maybe-write cycle per selection
/// mutation. Returns whether the encoded link actually changed; the host
/// rewrites its location (replace, not push) only in that case.
pub fn sync_link(session: &mut Session) -> bool {
    let encoded = share::encode(&session.selection);
    let changed = encoded != session.link;
    if changed {
        session.link = encoded;
    }
    changed
}

pub fn selection_json(session: &Session, link_changed: bool) -> serde_json::Value {
    json!({
        "selectedIds": session.selection.ids(),
        "link": session.link,
        "linkChanged": link_changed,
    })
}
