use std::path::PathBuf;

use rusqlite::Connection;
use serde::Deserialize;

use crate::filter::FilterState;
use crate::model::{default_catalog, Course};
use crate::selection::SelectionSet;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Session-scoped mutable state. Everything the UI renders derives from
/// here; the store is only consulted at workspace bind and on explicit
/// writes.
pub struct Session {
    pub catalog: Vec<Course>,
    pub filters: FilterState,
    pub selection: SelectionSet,
    pub student_name: String,
    /// Last encoded `selected` parameter value; `None` while the selection
    /// is empty. Mutations compare against this to decide whether the host
    /// must rewrite its location.
    pub link: Option<String>,
    pub admin: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            // Browsing works before a workspace is bound.
            catalog: default_catalog(),
            filters: FilterState::default(),
            selection: SelectionSet::new(),
            student_name: String::new(),
            link: None,
            admin: false,
        }
    }
}

pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub db: Option<Connection>,
    pub session: Session,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            workspace: None,
            db: None,
            session: Session::default(),
        }
    }
}
