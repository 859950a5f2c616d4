//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `directory_core` linkage without a UI shell.
//! - Keep output deterministic for quick local sanity checks.

use directory_core::{visible_people, DirectoryService, MemoryKeyValueStore, Person, Tag};

fn main() {
    println!("directory_core ping={}", directory_core::ping());
    println!("directory_core version={}", directory_core::core_version());

    let tags = Tag::ALL.map(Tag::as_str).join(",");
    println!("directory_core tags={tags}");

    let mut service = DirectoryService::open(MemoryKeyValueStore::new());
    service.add_person("probe", "smoke check", vec![Tag::Work]);
    let people: &[Person] = service.state().people();
    println!(
        "directory_core probe total={} visible_work={}",
        people.len(),
        visible_people(people, "", &[Tag::Work]).len()
    );
}
