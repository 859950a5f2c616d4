//! Directory state manager.
//!
//! # Responsibility
//! - Own the canonical people collection and the transient view state
//!   (selection, search text, active tag filters).
//!
//! # Invariants
//! - New people are prepended; the collection is newest first.
//! - Selection is an id lookup and never owns a record.
//! - Active filters hold each tag at most once.
//! - There is no update or delete path for existing people.

use crate::model::person::{Person, PersonId, Tag};
use crate::search::filter::visible_people;

/// List projection distinguishing the two empty cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState<'a> {
    /// The collection itself is empty.
    GetStarted,
    /// People exist but none match the current search/filters.
    NoResults,
    People(Vec<&'a Person>),
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    people: Vec<Person>,
    selected: Option<PersonId>,
    search_query: String,
    active_tags: Vec<Tag>,
}

impl DirectoryState {
    /// Builds state around an already loaded collection.
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people,
            ..Self::default()
        }
    }

    /// Mints an id and prepends a new person. Inputs are stored verbatim.
    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        fact: impl Into<String>,
        tags: Vec<Tag>,
    ) -> &Person {
        self.people.insert(0, Person::new(name, fact, tags));
        &self.people[0]
    }

    pub fn select_person(&mut self, id: PersonId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Resolves the current selection against the collection.
    pub fn selected_person(&self) -> Option<&Person> {
        let id = self.selected.as_ref()?;
        self.people.iter().find(|person| &person.id == id)
    }

    /// Adds `tag` to the active filters if absent, removes it otherwise.
    pub fn toggle_filter_tag(&mut self, tag: Tag) {
        if let Some(index) = self.active_tags.iter().position(|active| *active == tag) {
            self.active_tags.remove(index);
        } else {
            self.active_tags.push(tag);
        }
    }

    pub fn clear_filters(&mut self) {
        self.active_tags.clear();
    }

    /// Replaces the search text as typed; normalization happens at query time.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn active_tags(&self) -> &[Tag] {
        &self.active_tags
    }

    pub fn is_tag_active(&self, tag: Tag) -> bool {
        self.active_tags.contains(&tag)
    }

    pub fn total_people_count(&self) -> usize {
        self.people.len()
    }

    /// Recomputes the filtered view from the current state.
    pub fn visible_people(&self) -> Vec<&Person> {
        visible_people(&self.people, &self.search_query, &self.active_tags)
    }

    pub fn list_state(&self) -> ListState<'_> {
        if self.people.is_empty() {
            return ListState::GetStarted;
        }
        let visible = self.visible_people();
        if visible.is_empty() {
            ListState::NoResults
        } else {
            ListState::People(visible)
        }
    }
}
