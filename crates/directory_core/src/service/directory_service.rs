//! Directory use-case service.
//!
//! # Responsibility
//! - Load the collection once on open and build `DirectoryState`.
//! - Persist the full collection after every mutating transition.
//!
//! # Invariants
//! - View-state changes (selection, search, filters) never touch storage.
//! - Persistence failures never reach callers; the in-memory state stays
//!   authoritative for the session.

use crate::model::person::{Person, PersonId, Tag};
use crate::repo::people_repo::PeopleRepository;
use crate::state::directory_state::{DirectoryState, ListState};
use crate::store::KeyValueStore;
use log::info;

/// Composition root owning directory state and its persistence adapter.
pub struct DirectoryService<S: KeyValueStore> {
    repo: PeopleRepository<S>,
    state: DirectoryState,
}

impl<S: KeyValueStore> DirectoryService<S> {
    /// Loads persisted people from `store`.
    pub fn open(store: S) -> Self {
        let repo = PeopleRepository::new(store);
        let people = repo.load();
        info!(
            "event=directory_open module=service status=ok count={}",
            people.len()
        );
        Self {
            repo,
            state: DirectoryState::new(people),
        }
    }

    /// Adds one person at the front of the list and persists the collection.
    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        fact: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Person {
        let created = self.state.add_person(name, fact, tags).clone();
        self.repo.save(self.state.people());
        info!(
            "event=person_add module=service status=ok tag_count={} total={}",
            created.tags.len(),
            self.state.total_people_count()
        );
        created
    }

    pub fn select_person(&mut self, id: PersonId) {
        self.state.select_person(id);
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    pub fn toggle_filter_tag(&mut self, tag: Tag) {
        self.state.toggle_filter_tag(tag);
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.state.set_search_query(text);
    }

    pub fn selected_person(&self) -> Option<&Person> {
        self.state.selected_person()
    }

    pub fn visible_people(&self) -> Vec<&Person> {
        self.state.visible_people()
    }

    pub fn list_state(&self) -> ListState<'_> {
        self.state.list_state()
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn repository(&self) -> &PeopleRepository<S> {
        &self.repo
    }
}
