//! Command implementations for conan-pin CLI

pub mod install;
