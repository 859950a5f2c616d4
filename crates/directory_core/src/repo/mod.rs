//! Persistence adapter for the people collection.
//!
//! # Responsibility
//! - Serialize the whole collection into one named store slot.
//! - Recover from every storage or decode failure locally.
//!
//! # Invariants
//! - `load`/`save` never return errors to callers; failures are logged.
//! - Each save is a full-collection overwrite of a single slot.

pub mod people_repo;
