mod test_support;

use serde_json::json;
use test_support::{error_code, request, request_ok, spawn_sidecar};

fn ids(result: &serde_json::Value) -> Vec<i64> {
    result["courses"]
        .as_array()
        .expect("courses array")
        .iter()
        .map(|c| c["id"].as_i64().expect("course id"))
        .collect()
}

#[test]
fn all_axes_must_hold_simultaneously() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    // Default catalog: Sunday holds courses 1 (א-ב) and 2 (ג-ד).
    let day_only = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "filters.set",
        json!({ "day": "ראשון" }),
    );
    assert_eq!(ids(&day_only), vec![1, 2]);

    let day_and_grade = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "filters.set",
        json!({ "day": "ראשון", "gradeLevel": "ג-ד" }),
    );
    assert_eq!(ids(&day_and_grade), vec![2]);

    let impossible = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "filters.set",
        json!({ "day": "ראשון", "gradeLevel": "ג-ד", "timeSlot": "שעה 1" }),
    );
    assert_eq!(ids(&impossible), Vec::<i64>::new());
}

#[test]
fn grade_axis_is_not_silently_dropped() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    // Tuesday has both a ג-ד course (5) and a ז-ח course (6).
    let graded = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "filters.set",
        json!({ "day": "שלישי", "gradeLevel": "ז-ח" }),
    );
    assert_eq!(ids(&graded), vec![6]);
}

#[test]
fn search_is_a_case_insensitive_substring_over_name_and_details() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let by_name = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "filters.set",
        json!({ "search": "יוגה" }),
    );
    assert_eq!(ids(&by_name), vec![8]);

    let by_details = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "filters.set",
        json!({ "search": "מעבדה" }),
    );
    assert_eq!(ids(&by_details), vec![6]);
}

#[test]
fn the_all_sentinel_and_null_both_reset_an_axis() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let narrowed = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "filters.set",
        json!({ "day": "חמישי" }),
    );
    assert_eq!(ids(&narrowed), vec![9, 10]);

    let via_sentinel = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "filters.set",
        json!({ "day": "הכל" }),
    );
    assert_eq!(ids(&via_sentinel).len(), 10);

    let via_null = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "filters.set",
        json!({ "day": null }),
    );
    assert_eq!(ids(&via_null).len(), 10);
}

#[test]
fn unknown_enum_labels_are_rejected() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let resp = request(
        &mut stdin,
        &mut reader,
        "1",
        "filters.set",
        json!({ "day": "שבת" }),
    );
    assert_eq!(error_code(&resp), "bad_params");

    // The rejected request must not have clobbered the filter state.
    let listed = request_ok(&mut stdin, &mut reader, "2", "courses.list", json!({}));
    assert_eq!(ids(&listed).len(), 10);
}
