//! Error types and handling for conan-pin
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Profile and override errors
//! - [`search`]: Package search errors
//! - [`command`]: External command errors
//! - [`fs`]: File system errors

pub mod command;
pub mod config;
pub mod fs;
pub mod search;


use miette::Diagnostic;
use thiserror::Error;

/// Exit status used when the external tool could not be started at all.
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// Main error type for conan-pin operations
#[derive(Error, Diagnostic, Debug)]
pub enum PinError {
    // Configuration errors
    #[error("Could not parse conan {kind} (expected format is key=value): {input}")]
    #[diagnostic(
        code(conan_pin::config::override_parse_failed),
        help("Pass each {kind} as a single key=value pair, e.g. -o shared=True")
    )]
    OverrideParseFailed { kind: &'static str, input: String },

    #[error("Failed to read Conan profile: {path}")]
    #[diagnostic(
        code(conan_pin::config::profile_read_failed),
        help("Check that the profile path passed with -pr exists and is readable")
    )]
    ProfileReadFailed { path: String, reason: String },

    #[error("Invalid package reference '{reference}': {reason}")]
    #[diagnostic(
        code(conan_pin::config::invalid_reference),
        help("Package references look like name/version@user/channel, e.g. zlib/1.2.11@conan/stable")
    )]
    InvalidReference { reference: String, reason: String },

    // Search errors
    #[error("Could not find any matching Conan packages on remote '{remote}' for {reference}")]
    #[diagnostic(
        code(conan_pin::search::not_found),
        help("No match at the '{level}' level; check the profile, options and settings")
    )]
    PackageNotFound {
        reference: String,
        remote: String,
        level: &'static str,
    },

    #[error("Failed to parse search result: {path}")]
    #[diagnostic(code(conan_pin::search::parse_failed))]
    SearchResultParseFailed { path: String, reason: String },

    // External command errors
    #[error("Command failed with exit status {code}: {command}")]
    #[diagnostic(code(conan_pin::command::failed))]
    CommandFailed { command: String, code: i32 },

    #[error("Command terminated by signal: {command}")]
    #[diagnostic(code(conan_pin::command::terminated))]
    CommandTerminated { command: String },

    #[error("Failed to run '{program}': {reason}")]
    #[diagnostic(
        code(conan_pin::command::spawn_failed),
        help("Make sure conan is installed and on PATH, or pass --conan <PATH>")
    )]
    CommandSpawnFailed { program: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(conan_pin::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(conan_pin::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },
}

impl PinError {
    /// Process exit status to report for this error.
    ///
    /// A failing external command propagates its own exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            PinError::CommandFailed { code, .. } if *code != 0 => *code,
            PinError::CommandSpawnFailed { .. } => SPAWN_FAILURE_EXIT_CODE,
            _ => 1,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PinError>;
