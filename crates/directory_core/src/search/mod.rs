//! Derived-view computation over the people collection.
//!
//! # Invariants
//! - Filtering is pure and preserves collection order.

pub mod filter;
