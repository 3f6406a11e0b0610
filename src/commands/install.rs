//! Install command implementation
//!
//! Translates parsed arguments into an [`InstallRequest`] and drives the
//! install pipeline against the real `conan` executable.

use crate::artifacts::ArtifactPaths;
use crate::cli::Cli;
use crate::conan::SystemRunner;
use crate::error::Result;
use crate::operations::{InstallOperation, InstallRequest};
use crate::ui::{ConsoleReporter, ProgressReporter, QuietReporter};

/// Build the install request described by the command line
pub fn request_from_cli(cli: &Cli) -> InstallRequest {
    let mut request = InstallRequest::new(cli.reference.clone(), &cli.remote, &cli.profile);
    request.options.clone_from(&cli.options);
    request.settings.clone_from(&cli.settings);
    request.artifacts = ArtifactPaths::in_dir(&cli.artifacts_dir);
    request.dry_run = cli.dry_run;
    request
}

/// Run install command
pub fn run(cli: &Cli) -> Result<()> {
    let request = request_from_cli(cli);
    let runner = SystemRunner::new(&cli.conan);

    let mut reporter: Box<dyn ProgressReporter> = if cli.quiet {
        Box::new(QuietReporter)
    } else {
        Box::new(ConsoleReporter::new())
    };

    tracing::debug!(
        reference = %request.reference,
        remote = %request.remote,
        profile = %request.profile.display(),
        conan = %runner.program().display(),
        "Starting pinned install"
    );

    let outcome = InstallOperation::new(&runner, reporter.as_mut()).execute(&request)?;

    tracing::debug!(
        dependencies = outcome.dependencies.len(),
        installed = outcome.installed,
        "Pinned install finished"
    );
    reporter.finish("Done.");
    Ok(())
}
