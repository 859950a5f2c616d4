use directory_core::{Person, PersonId, Tag};

#[test]
fn person_new_mints_uuid_shaped_id() {
    let person = Person::new("Ana", "likes tea", vec![Tag::Work]);

    assert!(uuid::Uuid::parse_str(person.id.as_str()).is_ok());
    assert_eq!(person.name, "Ana");
    assert_eq!(person.fact, "likes tea");
    assert_eq!(person.tags, vec![Tag::Work]);
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person = Person::with_id("abc", "Bo", "likes coffee", vec![Tag::Personal, Tag::Outreach]);

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "abc",
            "name": "Bo",
            "fact": "likes coffee",
            "tags": ["personal", "outreach"]
        })
    );

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn missing_tags_field_decodes_as_empty() {
    let value = serde_json::json!({"id": "1", "name": "Ana", "fact": "likes tea"});

    let person: Person = serde_json::from_value(value).unwrap();
    assert_eq!(person.id, PersonId::from("1"));
    assert!(person.tags.is_empty());
}

#[test]
fn duplicate_tags_are_preserved_in_order() {
    let value = serde_json::json!({
        "id": "1",
        "name": "Ana",
        "fact": "likes tea",
        "tags": ["outreach", "work", "outreach"]
    });

    let person: Person = serde_json::from_value(value).unwrap();
    assert_eq!(person.tags, vec![Tag::Outreach, Tag::Work, Tag::Outreach]);
}

#[test]
fn tag_all_lists_display_order() {
    let labels: Vec<&str> = Tag::ALL.iter().map(|tag| tag.as_str()).collect();
    assert_eq!(labels, vec!["work", "personal", "outreach"]);
}
