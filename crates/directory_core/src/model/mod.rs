//! Directory domain model.
//!
//! # Responsibility
//! - Define the canonical `Person` record and the closed `Tag` set.
//!
//! # Invariants
//! - Every person is identified by a stable `PersonId`.
//! - Records are create-only; there is no update or delete path.

pub mod person;
