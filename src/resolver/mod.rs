//! Package ID resolution for conan-pin
//!
//! This module handles:
//! - Running `conan search` with the merged query against one remote
//! - Parsing the structured search result
//! - Picking a single binary package, first entry at every nesting level

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::conan::{CommandRunner, ConanCommand, PackageReference, StdoutTarget};
use crate::config::Query;
use crate::error::{Result, fs, search};
use crate::ui::ProgressReporter;

/// Structured output of `conan search --json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub results: Vec<ResultGroup>,
}

/// Matches from one remote
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultGroup {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// Matches for one recipe
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub packages: Vec<PackageEntry>,
}

/// One binary package
#[derive(Debug, Clone, Deserialize)]
pub struct PackageEntry {
    pub id: String,
}

/// Nesting level of the search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLevel {
    Results,
    Items,
    Packages,
}

impl SearchLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchLevel::Results => "results",
            SearchLevel::Items => "items",
            SearchLevel::Packages => "packages",
        }
    }
}

impl fmt::Display for SearchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A level that had more than one candidate; the first one was used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguousMatch {
    pub level: SearchLevel,
    pub candidates: usize,
}

impl fmt::Display for AmbiguousMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "multiple matching packages found ({} {}), choosing first one!",
            self.candidates, self.level
        )
    }
}

/// Selected package and any ambiguity met on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub package_id: String,
    pub ambiguous: Vec<AmbiguousMatch>,
}

impl SearchResult {
    /// Load a search result written by `conan search -j`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&content)
            .map_err(|e| search::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Pick the first group, its first item and that item's first package.
    ///
    /// Order is the order reported by `conan`; no ranking is applied. Each
    /// level with several candidates is warned about through `reporter` as
    /// soon as it is inspected, so the warning survives a later miss.
    pub fn select(
        &self,
        reference: &PackageReference,
        remote: &str,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<Resolution> {
        let mut picker = FirstPicker {
            reporter,
            ambiguous: Vec::new(),
        };
        let not_found = |level| search::not_found(reference.as_str(), remote, level);

        let group = picker
            .first(&self.results, SearchLevel::Results)
            .ok_or_else(|| not_found("results"))?;
        let item = picker
            .first(&group.items, SearchLevel::Items)
            .ok_or_else(|| not_found("items"))?;
        let package = picker
            .first(&item.packages, SearchLevel::Packages)
            .ok_or_else(|| not_found("packages"))?;

        Ok(Resolution {
            package_id: package.id.clone(),
            ambiguous: picker.ambiguous,
        })
    }
}

struct FirstPicker<'r> {
    reporter: &'r mut dyn ProgressReporter,
    ambiguous: Vec<AmbiguousMatch>,
}

impl FirstPicker<'_> {
    fn first<'a, T>(&mut self, entries: &'a [T], level: SearchLevel) -> Option<&'a T> {
        if entries.len() > 1 {
            let ambiguity = AmbiguousMatch {
                level,
                candidates: entries.len(),
            };
            self.reporter.warning(&ambiguity.to_string());
            self.ambiguous.push(ambiguity);
        }
        entries.first()
    }
}

/// Search `remote` for binaries of `reference` matching `query` and pick one.
///
/// The raw search result is kept at `json_path`. Every ambiguous level is
/// reported as a warning, even when the search ends without a match.
pub fn resolve_package_id(
    runner: &dyn CommandRunner,
    reporter: &mut dyn ProgressReporter,
    reference: &PackageReference,
    remote: &str,
    query: &Query,
    json_path: &Path,
) -> Result<Resolution> {
    let search = ConanCommand::Search {
        reference: reference.clone(),
        remote: remote.to_string(),
        query: query.to_string(),
        json_path: json_path.to_path_buf(),
    };
    runner.run_reported(reporter, &search, StdoutTarget::Inherit)?;

    let resolution = SearchResult::load(json_path)?.select(reference, remote, reporter)?;

    tracing::debug!(package_id = %resolution.package_id, "Resolved package ID");
    Ok(resolution)
}
