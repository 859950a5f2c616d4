//! In-memory directory state.

pub mod directory_state;
