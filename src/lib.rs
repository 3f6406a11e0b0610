//! conan-pin - install Conan packages with their original dependencies
//!
//! A plain `conan install` re-resolves version ranges and may pull newer
//! dependencies than the ones a prebuilt binary was built against. This crate
//! finds the binary matching a profile, reads its build-time dependency list
//! and installs it with every dependency pinned.

pub mod artifacts;
pub mod build_info;
pub mod cli;
pub mod commands;
pub mod conan;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod operations;
pub mod resolver;
pub mod ui;

#[cfg(test)]
pub mod test_fixtures;

pub use error::{PinError, Result};
pub use operations::{InstallOperation, InstallOutcome, InstallRequest};
