//! Local key-value slot storage.
//!
//! # Responsibility
//! - Define the `KeyValueStore` contract the persistence adapter writes to.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - `set` overwrites the whole slot value or leaves it untouched.
//! - Implementations never interpret slot contents.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reading or writing one slot.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// Slot table was written by a newer build with an unknown layout.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
    /// Write rejected because the value would exceed the store capacity.
    QuotaExceeded { requested: usize, quota: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "slot store schema version {found} is newer than supported {supported}"
            ),
            Self::QuotaExceeded { requested, quota } => write!(
                f,
                "storage quota exceeded: {requested} bytes requested, {quota} bytes allowed"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Named-slot string storage.
pub trait KeyValueStore {
    /// Reads one slot. Returns `None` when the slot was never written.
    fn get(&self, slot: &str) -> StoreResult<Option<String>>;
    /// Replaces one slot value.
    fn set(&mut self, slot: &str, value: &str) -> StoreResult<()>;
}
