//! Plumbing for the external `conan` command-line tool
//!
//! - [`reference`]: package references and their binary-qualified form
//! - [`command`]: typed `search`/`get`/`install` invocations
//! - [`runner`]: process execution behind the [`CommandRunner`] trait

pub mod command;
pub mod reference;
pub mod runner;

pub use command::{BUILD_INFO_REMOTE_FILE, ConanCommand};
pub use reference::{FullReference, PackageReference};
pub use runner::{CommandRunner, DEFAULT_CONAN_PROGRAM, StdoutTarget, SystemRunner, command_line};
