//! SQLite-backed slot store over the `kv_slots` table.
//!
//! # Invariants
//! - The table is created on open; `PRAGMA user_version` records its layout.
//! - A file stamped with a newer layout is refused rather than overwritten.

use super::{KeyValueStore, StoreError, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Layout version written to `PRAGMA user_version`.
pub const SLOT_SCHEMA_VERSION: u32 = 1;

const CREATE_SLOTS_SQL: &str = "CREATE TABLE IF NOT EXISTS kv_slots (
    slot TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

/// Slot store owning one SQLite connection.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Opens (or creates) a store file and prepares the slot table.
    ///
    /// # Side effects
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        open_with("file", || Connection::open(path))
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        open_with("memory", Connection::open_in_memory)
    }

    /// Underlying connection, for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<SqliteKeyValueStore> {
    let started_at = Instant::now();
    let opened = connect()
        .map_err(StoreError::from)
        .and_then(|conn| prepare_slots(&conn).map(|()| conn));

    match opened {
        Ok(conn) => {
            info!(
                "event=store_open module=store status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(SqliteKeyValueStore { conn })
        }
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode={mode} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn prepare_slots(conn: &Connection) -> StoreResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    let found = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    if found > SLOT_SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchemaVersion {
            found,
            supported: SLOT_SCHEMA_VERSION,
        });
    }
    if found < SLOT_SCHEMA_VERSION {
        conn.execute_batch(&format!(
            "BEGIN;
             {CREATE_SLOTS_SQL}
             PRAGMA user_version = {SLOT_SCHEMA_VERSION};
             COMMIT;"
        ))?;
    }
    Ok(())
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, slot: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE slot = ?1;",
                [slot],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, slot: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (slot, value) VALUES (?1, ?2)
             ON CONFLICT(slot) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![slot, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteKeyValueStore;
    use crate::store::KeyValueStore;

    #[test]
    fn missing_slot_reads_as_none() {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();
        assert_eq!(store.get("directory").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = SqliteKeyValueStore::open_in_memory().unwrap();
        store.set("directory", "[]").unwrap();
        store.set("directory", "[1]").unwrap();
        assert_eq!(store.get("directory").unwrap().as_deref(), Some("[1]"));
    }
}
