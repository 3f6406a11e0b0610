//! UI/Progress presentation layer
//!
//! This module handles human-readable narration of the install pipeline:
//! step headings, resolved values, the command lines being run and
//! non-fatal warnings.
//!
//! All narration goes through the [`ProgressReporter`] trait so the pipeline
//! can be driven without a terminal (tests, library callers).

use console::Style;

/// Progress reporter trait for the install pipeline
pub trait ProgressReporter {
    /// Announce the start of a pipeline step
    fn step(&mut self, title: &str);

    /// Report a labelled value (query, package reference, ...)
    fn detail(&mut self, label: &str, value: &str);

    /// Report one entry of a list (e.g. a dependency)
    fn item(&mut self, value: &str);

    /// Echo an external command line before it runs
    fn command(&mut self, command_line: &str);

    /// Non-fatal problem, execution continues
    fn warning(&mut self, message: &str);

    /// Final outcome of the run
    fn finish(&mut self, message: &str);
}

/// Reporter writing styled narration to the terminal
///
/// Warnings go to stderr, everything else to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for ConsoleReporter {
    fn step(&mut self, title: &str) {
        println!();
        println!("{}", Style::new().bold().apply_to(title));
    }

    fn detail(&mut self, label: &str, value: &str) {
        println!("{} {}", Style::new().bold().apply_to(label), value);
    }

    fn item(&mut self, value: &str) {
        println!("  {value}");
    }

    fn command(&mut self, command_line: &str) {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Running cmd:"),
            Style::new().cyan().apply_to(command_line)
        );
    }

    fn warning(&mut self, message: &str) {
        eprintln!(
            "{} {}",
            Style::new().bold().yellow().apply_to("WARNING:"),
            message
        );
    }

    fn finish(&mut self, message: &str) {
        println!("{}", Style::new().bold().green().apply_to(message));
    }
}

/// Reporter for `--quiet`: only warnings reach the terminal
#[derive(Debug, Default)]
pub struct QuietReporter;

impl ProgressReporter for QuietReporter {
    fn step(&mut self, _title: &str) {}

    fn detail(&mut self, _label: &str, _value: &str) {}

    fn item(&mut self, _value: &str) {}

    fn command(&mut self, _command_line: &str) {}

    fn warning(&mut self, message: &str) {
        ConsoleReporter.warning(message);
    }

    fn finish(&mut self, _message: &str) {}
}
