//! Configuration input handling for conan-pin
//!
//! This module contains:
//! - [`document`]: reader for Conan's INI-like documents (profiles, `conaninfo.txt`)
//! - [`query`]: search query assembly from a profile and explicit overrides

pub mod document;
pub mod query;

// Re-export commonly used types
pub use document::{ConanDocument, Entry, Section};
pub use query::{Override, OverrideKind, Query, build_query};
