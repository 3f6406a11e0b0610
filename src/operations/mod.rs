//! Operations module for pinned installs
//!
//! This module provides high-level operations that coordinate:
//! - Query building (from config module)
//! - Package ID resolution (from resolver module)
//! - Build-info download and dependency extraction (from build_info module)
//! - Pinned `conan install` (from installer module)
//! - Narration (from ui module)

pub mod install;

pub use install::{InstallOperation, InstallOutcome, InstallRequest};
