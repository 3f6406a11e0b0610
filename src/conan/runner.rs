//! Execution of `conan` subprocesses
//!
//! [`CommandRunner`] is the seam between the pipeline and the external tool.
//! [`SystemRunner`] spawns the real executable; tests substitute a fake.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::command::ConanCommand;
use crate::error::{Result, command, fs};
use crate::ui::ProgressReporter;

/// Executable used when none is configured
pub const DEFAULT_CONAN_PROGRAM: &str = "conan";

/// Where the standard output of a command goes
#[derive(Debug, Clone, Copy)]
pub enum StdoutTarget<'a> {
    /// Shared with this process
    Inherit,
    /// Written verbatim to a file, truncating it first
    File(&'a Path),
}

/// Runs typed `conan` invocations to completion
pub trait CommandRunner {
    /// Run the command and block until it exits.
    ///
    /// A non-zero exit status is an error carrying that status.
    fn run(&self, command: &ConanCommand, stdout: StdoutTarget<'_>) -> Result<()>;

    /// Human-readable command line for narration
    fn describe(&self, command: &ConanCommand) -> String {
        command_line(DEFAULT_CONAN_PROGRAM, &command.to_cli_args())
    }

    /// Echo the command line through `reporter`, then run it
    fn run_reported(
        &self,
        reporter: &mut dyn ProgressReporter,
        command: &ConanCommand,
        stdout: StdoutTarget<'_>,
    ) -> Result<()> {
        reporter.command(&self.describe(command));
        self.run(command, stdout)
    }
}

/// Spawns the configured `conan` executable
#[derive(Debug, Clone)]
pub struct SystemRunner {
    program: PathBuf,
}

impl SystemRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(DEFAULT_CONAN_PROGRAM)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, conan: &ConanCommand, stdout: StdoutTarget<'_>) -> Result<()> {
        let args = conan.to_cli_args();
        let line = self.describe(conan);
        tracing::debug!(command = %line, "Spawning conan");

        let mut cmd = Command::new(&self.program);
        cmd.args(&args);

        if let StdoutTarget::File(path) = stdout {
            let file = File::create(path)
                .map_err(|e| fs::write_failed(path.display().to_string(), e.to_string()))?;
            cmd.stdout(Stdio::from(file));
        }

        let status = cmd
            .status()
            .map_err(|e| command::spawn_failed(self.program.display().to_string(), e.to_string()))?;

        tracing::debug!(?status, subcommand = conan.subcommand(), "conan exited");

        if !status.success() {
            return Err(command::failed(line, status.code()));
        }

        Ok(())
    }

    fn describe(&self, command: &ConanCommand) -> String {
        command_line(&self.program.display().to_string(), &command.to_cli_args())
    }
}

/// Join a program and its arguments into one displayable line.
///
/// Arguments that are empty or contain whitespace or quotes are wrapped in
/// double quotes, with embedded quotes escaped.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(quote_arg)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &str) -> String {
    if !arg.is_empty() && !arg.chars().any(|c| c.is_whitespace() || c == '"') {
        return arg.to_string();
    }
    format!("\"{}\"", arg.replace('"', "\\\""))
}
