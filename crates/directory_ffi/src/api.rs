//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose directory use-cases to Dart via FRB.
//! - Translate between core types and flat, string-based DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Directory state lives in a caller-owned `DirectoryHandle`, never in a
//!   process global.
//! - Name and fact must be non-blank on create; nothing else is validated.

use directory_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    DirectoryService, ListState, Person, PersonId, SqliteKeyValueStore, Tag,
};
use log::{error, warn};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

const DB_PATH_ENV: &str = "DIRECTORY_DB_PATH";
const DB_FILE_NAME: &str = "directory.sqlite3";

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and an error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Tag labels in display order, for the filter chips and the form.
#[flutter_rust_bridge::frb(sync)]
pub fn directory_tags() -> Vec<String> {
    Tag::ALL.iter().map(|tag| tag.as_str().to_string()).collect()
}

/// Owned directory session held by the UI shell.
#[flutter_rust_bridge::frb(opaque)]
pub struct DirectoryHandle {
    service: Mutex<DirectoryService<SqliteKeyValueStore>>,
    persistent: bool,
}

impl DirectoryHandle {
    fn lock(&self) -> MutexGuard<'_, DirectoryService<SqliteKeyValueStore>> {
        self.service
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Flat person projection for cards and the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonView {
    pub id: String,
    pub name: String,
    pub fact: String,
    pub tags: Vec<String>,
}

/// Which list affordance the UI should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryListKind {
    /// No people at all yet.
    GetStarted,
    /// People exist but the search/filters hide all of them.
    NoResults,
    People,
}

/// Current list view plus the inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListResponse {
    pub kind: DirectoryListKind,
    pub items: Vec<PersonView>,
    pub total_count: u32,
    /// `false` when the session fell back to an in-memory store; adds are
    /// lost when the app exits.
    pub persistent: bool,
    pub search_query: String,
    pub active_tags: Vec<String>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryActionResponse {
    pub ok: bool,
    /// Created person id for add actions.
    pub person_id: Option<String>,
    pub message: String,
}

impl DirectoryActionResponse {
    fn success(message: impl Into<String>, person_id: Option<String>) -> Self {
        Self {
            ok: true,
            person_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            person_id: None,
            message: message.into(),
        }
    }
}

/// Opens the directory store and loads persisted people.
///
/// Path resolution: explicit `db_path`, then `DIRECTORY_DB_PATH`, then a
/// file in the system temp directory. When the file cannot be opened the
/// session falls back to an in-memory store so the UI keeps working.
#[flutter_rust_bridge::frb(sync)]
pub fn directory_open(db_path: Option<String>) -> Result<DirectoryHandle, String> {
    let path = resolve_db_path(db_path);
    let (store, persistent) = match SqliteKeyValueStore::open(&path) {
        Ok(store) => (store, true),
        Err(err) => {
            error!(
                "event=directory_open module=ffi status=error error_code=store_open_failed \
                 fallback=memory error={err}"
            );
            let store = SqliteKeyValueStore::open_in_memory()
                .map_err(|err| format!("directory_open failed: {err}"))?;
            (store, false)
        }
    };
    Ok(DirectoryHandle {
        service: Mutex::new(DirectoryService::open(store)),
        persistent,
    })
}

/// Adds one person from the create form.
#[flutter_rust_bridge::frb(sync)]
pub fn directory_add_person(
    handle: &DirectoryHandle,
    name: String,
    fact: String,
    tags: Vec<String>,
) -> DirectoryActionResponse {
    if name.trim().is_empty() {
        return DirectoryActionResponse::failure("name is required");
    }
    if fact.trim().is_empty() {
        return DirectoryActionResponse::failure("fact is required");
    }
    let tags = match parse_tags(&tags) {
        Ok(tags) => tags,
        Err(message) => return DirectoryActionResponse::failure(message),
    };

    let created = handle.lock().add_person(name, fact, tags);
    DirectoryActionResponse::success("Person added.", Some(created.id.to_string()))
}

/// Replaces the search text.
#[flutter_rust_bridge::frb(sync)]
pub fn directory_set_search(handle: &DirectoryHandle, text: String) {
    handle.lock().set_search_query(text);
}

/// Toggles one tag filter chip.
#[flutter_rust_bridge::frb(sync)]
pub fn directory_toggle_filter(handle: &DirectoryHandle, tag: String) -> DirectoryActionResponse {
    match tag.parse::<Tag>() {
        Ok(tag) => {
            handle.lock().toggle_filter_tag(tag);
            DirectoryActionResponse::success("Filter toggled.", None)
        }
        Err(err) => {
            warn!("event=filter_toggle module=ffi status=error error_code=unknown_tag");
            DirectoryActionResponse::failure(err.to_string())
        }
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn directory_clear_filters(handle: &DirectoryHandle) {
    handle.lock().clear_filters();
}

/// Opens the detail overlay for one person.
#[flutter_rust_bridge::frb(sync)]
pub fn directory_select(handle: &DirectoryHandle, person_id: String) {
    handle.lock().select_person(PersonId::from(person_id));
}

#[flutter_rust_bridge::frb(sync)]
pub fn directory_clear_selection(handle: &DirectoryHandle) {
    handle.lock().clear_selection();
}

/// Person shown in the detail overlay, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn directory_selected(handle: &DirectoryHandle) -> Option<PersonView> {
    handle.lock().selected_person().map(to_person_view)
}

/// Computes the visible list for the current search and filters.
#[flutter_rust_bridge::frb(sync)]
pub fn directory_list(handle: &DirectoryHandle) -> DirectoryListResponse {
    let service = handle.lock();
    let state = service.state();
    let (kind, items) = match service.list_state() {
        ListState::GetStarted => (DirectoryListKind::GetStarted, Vec::new()),
        ListState::NoResults => (DirectoryListKind::NoResults, Vec::new()),
        ListState::People(people) => (
            DirectoryListKind::People,
            people.into_iter().map(to_person_view).collect(),
        ),
    };

    DirectoryListResponse {
        kind,
        items,
        total_count: u32::try_from(state.total_people_count()).unwrap_or(u32::MAX),
        persistent: handle.persistent,
        search_query: state.search_query().to_string(),
        active_tags: state
            .active_tags()
            .iter()
            .map(|tag| tag.as_str().to_string())
            .collect(),
    }
}

fn parse_tags(raw: &[String]) -> Result<Vec<Tag>, String> {
    raw.iter()
        .map(|value| value.parse::<Tag>().map_err(|err| err.to_string()))
        .collect()
}

fn to_person_view(person: &Person) -> PersonView {
    PersonView {
        id: person.id.to_string(),
        name: person.name.clone(),
        fact: person.fact.clone(),
        tags: person
            .tags
            .iter()
            .map(|tag| tag.as_str().to_string())
            .collect(),
    }
}

fn resolve_db_path(explicit: Option<String>) -> PathBuf {
    let from_env = std::env::var(DB_PATH_ENV).ok();
    [explicit, from_env]
        .into_iter()
        .flatten()
        .map(|raw| raw.trim().to_string())
        .find(|trimmed| !trimmed.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME))
}
