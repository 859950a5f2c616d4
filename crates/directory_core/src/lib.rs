//! Core domain logic for the Directory app.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod state;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Person, PersonId, Tag, UnknownTag};
pub use repo::people_repo::{PeopleRepository, PersistError, PersistResult, PEOPLE_SLOT};
pub use search::filter::{normalize_query, visible_people};
pub use service::directory_service::DirectoryService;
pub use state::directory_state::{DirectoryState, ListState};
pub use store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
