use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

use crate::model::{default_catalog, Course};

pub const SLOT_CATALOG: &str = "catalog";
pub const SLOT_STUDENT_NAME: &str = "student_name";

pub fn open_store(workspace: &Path) -> anyhow::Result<Connection> {
    std::fs::create_dir_all(workspace)?;
    let db_path = workspace.join("timetable.sqlite3");
    let conn = Connection::open(db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Two independent string-keyed slots live here: the published catalog blob
/// and the student display name.
pub fn init_schema(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS slots(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

pub fn slot_get(conn: &Connection, key: &str) -> anyhow::Result<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM slots WHERE key = ?", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

pub fn slot_set(conn: &Connection, key: &str, value: &str) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO slots(key, value, updated_at) VALUES(?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        (key, value, Utc::now().to_rfc3339()),
    )?;
    Ok(())
}

/// Read the published catalog. A missing or unparseable slot falls back to
/// the built-in default catalog with a stderr diagnostic; the session must
/// never start without a catalog.
pub fn load_catalog(conn: &Connection) -> Vec<Course> {
    match slot_get(conn, SLOT_CATALOG) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<Course>>(&raw) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("timetabled: catalog slot is unparseable ({e}); using default catalog");
                default_catalog()
            }
        },
        Ok(None) => default_catalog(),
        Err(e) => {
            eprintln!("timetabled: catalog slot read failed ({e}); using default catalog");
            default_catalog()
        }
    }
}

pub fn save_catalog(conn: &Connection, catalog: &[Course]) -> anyhow::Result<()> {
    let raw = serde_json::to_string(catalog)?;
    slot_set(conn, SLOT_CATALOG, &raw)
}

pub fn load_student_name(conn: &Connection) -> String {
    match slot_get(conn, SLOT_STUDENT_NAME) {
        Ok(Some(name)) => name,
        Ok(None) => String::new(),
        Err(e) => {
            eprintln!("timetabled: student name slot read failed ({e}); using empty name");
            String::new()
        }
    }
}

pub fn save_student_name(conn: &Connection, name: &str) -> anyhow::Result<()> {
    slot_set(conn, SLOT_STUDENT_NAME, name)
}
