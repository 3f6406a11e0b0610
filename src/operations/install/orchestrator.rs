//! Main orchestrator for the install operation
//!
//! Runs the pipeline strictly in order and stops at the first failure:
//! 1. Build the search query from profile, options and settings
//! 2. Resolve a package ID on the remote
//! 3. Download the build-info report and extract its dependencies
//! 4. Install with every dependency pinned
//!
//! Nothing is retried or rolled back; artifacts written before a failure stay
//! on disk.

use crate::build_info;
use crate::conan::{CommandRunner, FullReference};
use crate::config::build_query;
use crate::error::Result;
use crate::installer;
use crate::resolver::{self, AmbiguousMatch};
use crate::ui::ProgressReporter;

use super::context::InstallRequest;

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Rendered search query
    pub query: String,
    /// Reference qualified with the selected package ID
    pub full_reference: FullReference,
    /// Dependencies passed as `--require-override`
    pub dependencies: Vec<String>,
    /// Search levels where the first of several candidates was taken
    pub ambiguous: Vec<AmbiguousMatch>,
    /// False for a dry run
    pub installed: bool,
}

/// Main orchestrator for install operation
pub struct InstallOperation<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a mut dyn ProgressReporter,
}

impl<'a> InstallOperation<'a> {
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a mut dyn ProgressReporter) -> Self {
        Self { runner, reporter }
    }

    pub fn execute(&mut self, request: &InstallRequest) -> Result<InstallOutcome> {
        self.reporter
            .step("Getting Conan search query argument from Conan profile.");
        let query = build_query(&request.profile, &request.options, &request.settings)?;
        let rendered_query = query.to_string();
        self.reporter.detail("Full query:", &rendered_query);

        request.artifacts.ensure_dirs()?;

        self.reporter
            .step("Getting the Conan package ID for a given profile query...");
        let resolution = resolver::resolve_package_id(
            self.runner,
            self.reporter,
            &request.reference,
            &request.remote,
            &query,
            &request.artifacts.search_result,
        )?;
        let full_reference = request.reference.with_package_id(&resolution.package_id);
        self.reporter.detail(
            "Using full package reference with package ID:",
            &full_reference.to_string(),
        );

        self.reporter
            .step("Getting the Conan build-time information from remote...");
        build_info::fetch_build_info(
            self.runner,
            self.reporter,
            &full_reference,
            &request.remote,
            &request.artifacts.build_info,
        )?;

        self.reporter
            .step("Getting build-time versions of dependencies...");
        let dependencies = build_info::extract_dependencies(&request.artifacts.build_info)?;
        for dependency in &dependencies {
            self.reporter.item(dependency);
        }
        self.reporter
            .detail("Dependencies:", &format_dependencies(&dependencies));

        self.reporter.step(
            "Installing the conan package with the build-time versions of the dependencies...",
        );
        let installed = if request.dry_run {
            let install = installer::install_command(request, &dependencies);
            self.reporter
                .detail("[DRY RUN] Would run:", &self.runner.describe(&install));
            false
        } else {
            installer::install_with_overrides(self.runner, self.reporter, request, &dependencies)?;
            true
        };

        Ok(InstallOutcome {
            query: rendered_query,
            full_reference,
            dependencies,
            ambiguous: resolution.ambiguous,
            installed,
        })
    }
}

fn format_dependencies(dependencies: &[String]) -> String {
    if dependencies.is_empty() {
        return "(none)".to_string();
    }
    dependencies.join(", ")
}
