//! Search text and tag filter engine.
//!
//! # Responsibility
//! - Compute the visible subset from people, search text and active tags.
//!
//! # Invariants
//! - Text match is a case-insensitive substring on `name` or `fact`.
//! - Tag match uses AND semantics: every active tag must be present.
//! - Output keeps the relative order of the input (newest first).

use crate::model::person::{Person, Tag};

/// Lowercases and trims a raw search string.
///
/// Returns `None` when nothing is left to match on.
pub fn normalize_query(query: &str) -> Option<String> {
    let normalized = query.to_lowercase();
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Returns people passing both the text and the tag filter.
pub fn visible_people<'a>(
    people: &'a [Person],
    query: &str,
    active_tags: &[Tag],
) -> Vec<&'a Person> {
    let needle = normalize_query(query);
    people
        .iter()
        .filter(|person| matches_query(person, needle.as_deref()))
        .filter(|person| matches_tags(person, active_tags))
        .collect()
}

fn matches_query(person: &Person, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => {
            person.name.to_lowercase().contains(needle)
                || person.fact.to_lowercase().contains(needle)
        }
    }
}

fn matches_tags(person: &Person, active_tags: &[Tag]) -> bool {
    active_tags.iter().all(|tag| person.has_tag(*tag))
}
