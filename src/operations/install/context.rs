//! Input of the install operation
//!
//! [`InstallRequest`] carries everything one pinned install needs, so the
//! pipeline can be driven from the command line or programmatically.

use std::path::PathBuf;

use crate::artifacts::ArtifactPaths;
use crate::conan::PackageReference;

/// One pinned install of a package from a remote
#[derive(Debug, Clone)]
pub struct InstallRequest {
    /// `name/version@user/channel`
    pub reference: PackageReference,
    /// Remote to search, download the report from and install from
    pub remote: String,
    /// Conan profile used for the query and for `conan install`
    pub profile: PathBuf,
    /// Explicit `key=value` options, as given on the command line
    pub options: Vec<String>,
    /// Explicit `key=value` settings, as given on the command line
    pub settings: Vec<String>,
    /// Where the search result and build-info report are written
    pub artifacts: ArtifactPaths,
    /// Print the install command instead of running it
    pub dry_run: bool,
}

impl InstallRequest {
    pub fn new(reference: PackageReference, remote: impl Into<String>, profile: impl Into<PathBuf>) -> Self {
        Self {
            reference,
            remote: remote.into(),
            profile: profile.into(),
            options: Vec::new(),
            settings: Vec::new(),
            artifacts: ArtifactPaths::default(),
            dry_run: false,
        }
    }
}
