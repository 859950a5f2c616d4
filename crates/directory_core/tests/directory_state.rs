use directory_core::{DirectoryState, ListState, Person, Tag};

#[test]
fn add_person_grows_by_one_and_prepends() {
    let mut state = DirectoryState::new(vec![Person::with_id("1", "Ana", "likes tea", Vec::new())]);

    let created_id = state
        .add_person("Bo", "likes coffee", vec![Tag::Personal, Tag::Work])
        .id
        .clone();

    assert_eq!(state.total_people_count(), 2);
    assert_eq!(state.people()[0].id, created_id);
    assert_eq!(state.people()[0].name, "Bo");
    assert_eq!(state.people()[0].tags, vec![Tag::Personal, Tag::Work]);
    assert_eq!(state.people()[1].id.as_str(), "1");
}

#[test]
fn add_person_mints_unique_ids() {
    let mut state = DirectoryState::default();
    let first = state.add_person("Ana", "a", Vec::new()).id.clone();
    let second = state.add_person("Ana", "a", Vec::new()).id.clone();
    assert_ne!(first, second);
}

#[test]
fn toggling_a_tag_twice_restores_filters() {
    let mut state = DirectoryState::default();
    state.toggle_filter_tag(Tag::Outreach);
    let before = state.active_tags().to_vec();

    state.toggle_filter_tag(Tag::Work);
    assert!(state.is_tag_active(Tag::Work));
    state.toggle_filter_tag(Tag::Work);

    assert_eq!(state.active_tags(), before.as_slice());
    assert!(!state.is_tag_active(Tag::Work));
}

#[test]
fn clear_filters_removes_every_active_tag() {
    let mut state = DirectoryState::default();
    for tag in Tag::ALL {
        state.toggle_filter_tag(tag);
    }
    assert_eq!(state.active_tags().len(), 3);

    state.clear_filters();
    assert!(state.active_tags().is_empty());
}

#[test]
fn selection_resolves_by_id_and_clears() {
    let mut state = DirectoryState::default();
    let id = state.add_person("Ana", "likes tea", Vec::new()).id.clone();
    state.add_person("Bo", "likes coffee", Vec::new());

    state.select_person(id.clone());
    assert_eq!(state.selected_person().map(|person| &person.id), Some(&id));
    assert_eq!(state.total_people_count(), 2);

    state.clear_selection();
    assert!(state.selected_person().is_none());
}

#[test]
fn visible_people_tracks_search_and_filter_changes() {
    let mut state = DirectoryState::default();
    state.add_person("Ana", "likes tea", vec![Tag::Work]);
    state.add_person("Bo", "likes coffee", vec![Tag::Personal]);

    state.set_search_query("an");
    let names: Vec<&str> = state.visible_people().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ana"]);

    state.set_search_query("");
    state.toggle_filter_tag(Tag::Personal);
    let names: Vec<&str> = state.visible_people().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bo"]);

    state.toggle_filter_tag(Tag::Work);
    assert_eq!(state.list_state(), ListState::NoResults);
}
