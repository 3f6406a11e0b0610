//! Build-info reports (`conaninfo.txt`)
//!
//! Every binary package on a remote carries the report written when it was
//! built. Its `[full_requires]` section lists the exact dependency references
//! used at that time, each suffixed with `:<package_id>`.

use std::path::Path;

use crate::conan::{BUILD_INFO_REMOTE_FILE, CommandRunner, ConanCommand, FullReference, StdoutTarget};
use crate::config::ConanDocument;
use crate::error::{Result, fs};
use crate::ui::ProgressReporter;

/// Section of the report listing fully resolved dependencies
pub const FULL_REQUIRES_SECTION: &str = "full_requires";

/// Download the build-info report of `reference` from `remote` into `report_path`.
///
/// The report is written verbatim; a failed download leaves whatever `conan`
/// produced so far.
pub fn fetch_build_info(
    runner: &dyn CommandRunner,
    reporter: &mut dyn ProgressReporter,
    reference: &FullReference,
    remote: &str,
    report_path: &Path,
) -> Result<()> {
    let get = ConanCommand::Get {
        reference: reference.clone(),
        remote: remote.to_string(),
        file: BUILD_INFO_REMOTE_FILE.to_string(),
    };
    runner.run_reported(reporter, &get, StdoutTarget::File(report_path))
}

/// Dependency references recorded in the report at `report_path`
pub fn extract_dependencies(report_path: &Path) -> Result<Vec<String>> {
    let report = ConanDocument::read(report_path)
        .map_err(|e| fs::read_failed(report_path.display().to_string(), e.to_string()))?;
    Ok(dependencies_from_report(&report))
}

/// Keys of `[full_requires]` up to the first `:`, in document order.
///
/// A missing or empty section yields an empty list.
pub fn dependencies_from_report(report: &ConanDocument) -> Vec<String> {
    let Some(section) = report.section(FULL_REQUIRES_SECTION) else {
        tracing::debug!("Report has no [{FULL_REQUIRES_SECTION}] section");
        return Vec::new();
    };

    section
        .entries()
        .iter()
        .map(|entry| {
            entry
                .key
                .split_once(':')
                .map_or(entry.key.as_str(), |(dependency, _)| dependency)
                .to_string()
        })
        .collect()
}
