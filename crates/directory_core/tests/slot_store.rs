use directory_core::store::sqlite::SLOT_SCHEMA_VERSION;
use directory_core::{KeyValueStore, SqliteKeyValueStore, StoreError};

fn user_version(store: &SqliteKeyValueStore) -> u32 {
    store
        .connection()
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn open_stamps_schema_version_and_creates_slot_table() {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();

    assert_eq!(user_version(&store), SLOT_SCHEMA_VERSION);
    let exists: i64 = store
        .connection()
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'kv_slots'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn reopening_file_keeps_slot_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("directory.db");

    {
        let mut store = SqliteKeyValueStore::open(&path).unwrap();
        store.set("directory", "[]").unwrap();
    }

    let store = SqliteKeyValueStore::open(&path).unwrap();
    assert_eq!(user_version(&store), SLOT_SCHEMA_VERSION);
    assert_eq!(store.get("directory").unwrap().as_deref(), Some("[]"));
}

#[test]
fn newer_schema_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    {
        let store = SqliteKeyValueStore::open(&path).unwrap();
        store
            .connection()
            .execute_batch("PRAGMA user_version = 999;")
            .unwrap();
    }

    let err = SqliteKeyValueStore::open(&path).err().unwrap();
    match err {
        StoreError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, SLOT_SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn directory_path_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    assert!(SqliteKeyValueStore::open(dir.path()).is_err());
}
