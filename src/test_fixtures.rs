//! Test fixtures and utilities for reducing test setup duplication.
//!
//! - [`FakeRunner`]: a [`CommandRunner`] that records invocations and answers
//!   `search`/`get` with canned output instead of spawning `conan`
//! - [`RecordingReporter`]: a [`ProgressReporter`] that keeps every message
//! - document helpers writing profiles and reports into a temp directory

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::conan::{CommandRunner, ConanCommand, StdoutTarget};
use crate::error::{Result, command, fs};
use crate::ui::ProgressReporter;

/// Search result with a single package at every level
pub const SINGLE_PACKAGE_SEARCH: &str = r#"{
    "error": false,
    "results": [{
        "remote": "myremote",
        "items": [{
            "recipe": {"id": "myapp/1.0@me/stable"},
            "packages": [{"id": "id123", "settings": {"os": "Linux"}}]
        }]
    }]
}"#;

/// Build-info report with two recorded dependencies
pub const TWO_DEPENDENCY_REPORT: &str = "\
[settings]
    os=Linux

[requires]
    libA/1.Y.Z
    libB/3.Y.Z

[full_requires]
    libA/1.2@u/c:abcdef123456
    libB/3.4@u/c:fedcba654321

[env]
";

/// Records every command and fakes the files `conan` would produce
pub struct FakeRunner {
    search_json: String,
    build_info: String,
    fail_on: Option<(&'static str, i32)>,
    calls: RefCell<Vec<ConanCommand>>,
}

impl FakeRunner {
    pub fn new(search_json: &str, build_info: &str) -> Self {
        Self {
            search_json: search_json.to_string(),
            build_info: build_info.to_string(),
            fail_on: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Make the given subcommand exit with `code`
    pub fn failing_on(mut self, subcommand: &'static str, code: i32) -> Self {
        self.fail_on = Some((subcommand, code));
        self
    }

    pub fn calls(&self) -> Vec<ConanCommand> {
        self.calls.borrow().clone()
    }

    pub fn subcommands(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(ConanCommand::subcommand).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, conan: &ConanCommand, stdout: StdoutTarget<'_>) -> Result<()> {
        self.calls.borrow_mut().push(conan.clone());

        if let Some((subcommand, code)) = self.fail_on {
            if subcommand == conan.subcommand() {
                return Err(command::failed(self.describe(conan), Some(code)));
            }
        }

        match conan {
            ConanCommand::Search { json_path, .. } => write_output(json_path, &self.search_json)?,
            ConanCommand::Get { .. } => {
                if let StdoutTarget::File(path) = stdout {
                    write_output(path, &self.build_info)?;
                }
            }
            ConanCommand::Install { .. } => {}
        }

        Ok(())
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .map_err(|e| fs::write_failed(path.display().to_string(), e.to_string()))
}

/// Keeps all narration for assertions
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub steps: Vec<String>,
    pub details: Vec<(String, String)>,
    pub items: Vec<String>,
    pub commands: Vec<String>,
    pub warnings: Vec<String>,
    pub finished: Vec<String>,
}

impl RecordingReporter {
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&mut self, title: &str) {
        self.steps.push(title.to_string());
    }

    fn detail(&mut self, label: &str, value: &str) {
        self.details.push((label.to_string(), value.to_string()));
    }

    fn item(&mut self, value: &str) {
        self.items.push(value.to_string());
    }

    fn command(&mut self, command_line: &str) {
        self.commands.push(command_line.to_string());
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn finish(&mut self, message: &str) {
        self.finished.push(message.to_string());
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `content` to `dir/name` and return the path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}
