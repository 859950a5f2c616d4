//! People slot repository.
//!
//! # Responsibility
//! - Read the `directory` slot at startup and write it after every change.
//! - Keep the stored JSON array shape `{id, name, fact, tags?}`.
//!
//! # Invariants
//! - A missing slot loads as an empty collection without a diagnostic.
//! - A malformed slot loads as empty and emits `people_load status=error`.
//! - A failed write leaves the previously persisted value in place.

use crate::model::person::Person;
use crate::store::{KeyValueStore, StoreError};
use log::{debug, error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot name holding the serialized collection.
pub const PEOPLE_SLOT: &str = "directory";

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence failure surfaced by the fallible `try_*` entry points.
#[derive(Debug)]
pub enum PersistError {
    Store(StoreError),
    /// Stored value is not a JSON array of people.
    Decode(serde_json::Error),
    Encode(serde_json::Error),
}

impl PersistError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Store(StoreError::QuotaExceeded { .. }) => "quota_exceeded",
            Self::Store(StoreError::UnsupportedSchemaVersion { .. }) => "store_schema_too_new",
            Self::Store(StoreError::Sqlite(_)) => "store_io_failed",
            Self::Decode(_) => "decode_failed",
            Self::Encode(_) => "encode_failed",
        }
    }

    /// Log-safe summary of the failure.
    ///
    /// serde_json messages quote offending stored values, so decode errors are
    /// reduced to their category and position.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Store(err) => format!("error_code={} error={err}", self.code()),
            Self::Decode(err) | Self::Encode(err) => format!(
                "error_code={} category={:?} line={} column={}",
                self.code(),
                err.classify(),
                err.line(),
                err.column()
            ),
        }
    }
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "stored people are malformed: {err}"),
            Self::Encode(err) => write!(f, "failed to serialize people: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Decode(err) | Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for PersistError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Adapter between the in-memory collection and one store slot.
pub struct PeopleRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PeopleRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the persisted collection, falling back to empty on any failure.
    pub fn load(&self) -> Vec<Person> {
        match self.try_load() {
            Ok(Some(people)) => {
                debug!(
                    "event=people_load module=repo status=ok count={}",
                    people.len()
                );
                people
            }
            Ok(None) => {
                debug!("event=people_load module=repo status=ok count=0 slot=empty");
                Vec::new()
            }
            Err(err) => {
                error!(
                    "event=people_load module=repo status=error {}",
                    err.diagnostic()
                );
                Vec::new()
            }
        }
    }

    /// Writes the full collection; failures are logged and dropped.
    pub fn save(&mut self, people: &[Person]) {
        match self.try_save(people) {
            Ok(()) => debug!(
                "event=people_save module=repo status=ok count={}",
                people.len()
            ),
            Err(err) => warn!(
                "event=people_save module=repo status=error count={} {}",
                people.len(),
                err.diagnostic()
            ),
        }
    }

    /// Fallible read. `Ok(None)` means the slot was never written.
    pub fn try_load(&self) -> PersistResult<Option<Vec<Person>>> {
        let Some(raw) = self.store.get(PEOPLE_SLOT)? else {
            return Ok(None);
        };
        let people = serde_json::from_str::<Vec<Person>>(&raw).map_err(PersistError::Decode)?;
        Ok(Some(people))
    }

    /// Fallible write of the full collection.
    pub fn try_save(&mut self, people: &[Person]) -> PersistResult<()> {
        let raw = serde_json::to_string(people).map_err(PersistError::Encode)?;
        self.store.set(PEOPLE_SLOT, &raw)?;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
