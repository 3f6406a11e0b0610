//! Intermediate files written during a run
//!
//! Both files are overwritten on every run and left on disk afterwards.

use std::path::{Path, PathBuf};

use crate::error::{Result, fs};

/// File name of the structured `conan search` result
pub const SEARCH_RESULT_FILE: &str = "conan_search.json";

/// File name of the downloaded build-info report
pub const BUILD_INFO_FILE: &str = "conaninfo.txt";

/// Locations of the intermediate artifacts of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub search_result: PathBuf,
    pub build_info: PathBuf,
}

impl ArtifactPaths {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            search_result: dir.join(SEARCH_RESULT_FILE),
            build_info: dir.join(BUILD_INFO_FILE),
        }
    }

    /// Create the parent directories of both artifacts
    pub fn ensure_dirs(&self) -> Result<()> {
        for path in [&self.search_result, &self.build_info] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .map_err(|e| fs::write_failed(parent.display().to_string(), e.to_string()))?;
            }
        }
        Ok(())
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            search_result: PathBuf::from(SEARCH_RESULT_FILE),
            build_info: PathBuf::from(BUILD_INFO_FILE),
        }
    }
}
