//! Pinned installation
//!
//! Runs `conan install` with one `--require-override` per dependency recorded
//! in the build-info report. Conan still performs resolution and download; the
//! overrides only stop it from floating to newer compatible versions.

use crate::conan::{CommandRunner, ConanCommand, StdoutTarget};
use crate::error::Result;
use crate::operations::install::InstallRequest;
use crate::ui::ProgressReporter;

/// The `conan install` invocation for `request` pinned to `dependencies`
pub fn install_command(request: &InstallRequest, dependencies: &[String]) -> ConanCommand {
    ConanCommand::Install {
        reference: request.reference.clone(),
        remote: request.remote.clone(),
        profile: request.profile.clone(),
        require_overrides: dependencies.to_vec(),
        options: request.options.clone(),
        settings: request.settings.clone(),
    }
}

/// Install the requested package with every dependency pinned
pub fn install_with_overrides(
    runner: &dyn CommandRunner,
    reporter: &mut dyn ProgressReporter,
    request: &InstallRequest,
    dependencies: &[String],
) -> Result<()> {
    let install = install_command(request, dependencies);
    runner.run_reported(reporter, &install, StdoutTarget::Inherit)
}
