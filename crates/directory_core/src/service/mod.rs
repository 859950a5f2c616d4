//! Core use-case services.
//!
//! # Responsibility
//! - Compose state and persistence into one owned entry point.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod directory_service;
