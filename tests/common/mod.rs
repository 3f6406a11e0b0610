//! Common test utilities for conan-pin integration tests
//!
//! The binary is driven against a fake `conan` shell script that records its
//! arguments and answers `search`, `get` and `install` from fixture files.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const SEARCH_ONE_PACKAGE: &str = r#"{
    "error": false,
    "results": [
        {
            "remote": "myremote",
            "items": [
                {
                    "recipe": {"id": "myapp/1.0@me/stable"},
                    "packages": [{"id": "id123", "options": {}, "settings": {}}]
                }
            ]
        }
    ]
}"#;

pub const SEARCH_TWO_PACKAGES: &str = r#"{
    "results": [
        {"items": [{"packages": [{"id": "first"}, {"id": "second"}]}]}
    ]
}"#;

pub const SEARCH_NO_RESULTS: &str = r#"{"error": false, "results": []}"#;

pub const BUILD_INFO_REPORT: &str = "[settings]
    arch=x86_64
    os=Linux

[requires]
    libA/1.Y.Z

[full_requires]
    libA/1.2@u/c:abcdef123456
    libB/3.4@u/c:fedcba654321

[env]
";

pub const LINUX_PROFILE: &str = "[settings]
os=Linux
arch_build=x86_64
build_type=Release
[options]
shared=False
[env]
CC=gcc
";

/// A scratch directory holding a fake `conan`, its fixtures and a profile
pub struct TestWorkspace {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Workspace whose fake `conan` succeeds with the given search result
    pub fn new(search_json: &str) -> Self {
        Self::with_install_exit(search_json, 0)
    }

    /// Workspace whose fake `conan install` exits with `install_exit`
    pub fn with_install_exit(search_json: &str, install_exit: i32) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let workspace = Self { temp, path };

        workspace.write_file("fixtures/search.json", search_json);
        workspace.write_file("fixtures/conaninfo.txt", BUILD_INFO_REPORT);
        workspace.write_file("profiles/linux", LINUX_PROFILE);
        workspace.write_fake_conan(install_exit);
        workspace
    }

    fn write_fake_conan(&self, install_exit: i32) {
        let script = format!(
            r#"#!/bin/sh
printf '%s\n' "$*" >> "{log}"
case "$1" in
    search)
        while [ $# -gt 0 ]; do
            if [ "$1" = "-j" ]; then
                cp "{search}" "$2"
            fi
            shift
        done
        ;;
    get)
        cat "{report}"
        ;;
    install)
        exit {install_exit}
        ;;
esac
"#,
            log = self.log_path().display(),
            search = self.path.join("fixtures/search.json").display(),
            report = self.path.join("fixtures/conaninfo.txt").display(),
        );
        let conan = self.conan_path();
        std::fs::write(&conan, script).expect("Failed to write fake conan");
        std::fs::set_permissions(&conan, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake conan executable");
    }

    pub fn conan_path(&self) -> PathBuf {
        self.path.join("fake-conan")
    }

    pub fn log_path(&self) -> PathBuf {
        self.path.join("conan-calls.log")
    }

    pub fn profile_path(&self) -> PathBuf {
        self.path.join("profiles/linux")
    }

    /// One line per `conan` invocation, arguments joined by spaces
    pub fn conan_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// conan-pin running inside the workspace against the fake `conan`
    pub fn conan_pin_cmd(&self) -> Command {
        let mut cmd = conan_pin_cmd();
        cmd.current_dir(&self.path)
            .env("CONAN_PIN_CONAN", self.conan_path());
        cmd
    }

    /// Standard arguments for `myapp/1.0@me/stable` from `myremote`
    pub fn install_args(&self) -> Vec<String> {
        vec![
            "myapp/1.0@me/stable".to_string(),
            "-r".to_string(),
            "myremote".to_string(),
            "-pr".to_string(),
            path_str(&self.profile_path()),
        ]
    }
}

/// conan-pin with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn conan_pin_cmd() -> Command {
    let mut cmd = Command::cargo_bin("conan-pin").expect("conan-pin binary is built");
    cmd.env_remove("RUST_LOG")
        .env_remove("CONAN_PIN_CONAN")
        .env_remove("CONAN_PIN_ARTIFACTS_DIR")
        .env("NO_COLOR", "1");
    cmd
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
