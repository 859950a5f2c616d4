//! Flutter-facing bindings for the Directory core.

pub mod api;
