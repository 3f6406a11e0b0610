//! Search query assembly
//!
//! The query merges three layers, lowest precedence first:
//! 1. `[settings]` and `[options]` of the Conan profile
//! 2. explicit `-o key=value` options
//! 3. explicit `-s key=value` settings

use std::fmt;
use std::path::Path;

use super::document::ConanDocument;
use crate::error::{PinError, Result, config};

/// Profile keys with this suffix describe the build machine, not the package
pub const BUILD_TIME_SUFFIX: &str = "_build";

/// Profile sections that contribute to the query
pub const QUERY_SECTIONS: [&str; 2] = ["settings", "options"];

const CLAUSE_SEPARATOR: &str = " AND ";

/// Ordered `key=value` clauses of a package search query.
///
/// Keys keep their first-seen position; setting an existing key only replaces
/// its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    clauses: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.clauses.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.clauses.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.clauses
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().map(|(k, _)| k.as_str())
    }

    /// Register every query-relevant key of a profile document
    pub fn apply_profile(&mut self, profile: &ConanDocument) {
        for section in profile
            .sections()
            .filter(|s| QUERY_SECTIONS.contains(&s.name()))
        {
            tracing::debug!(section = section.name(), "Reading profile section");
            for entry in section.entries() {
                if entry.key.ends_with(BUILD_TIME_SUFFIX) {
                    continue;
                }
                let value = entry.value.as_deref().unwrap_or_default();
                self.set(entry.key.clone(), quote_profile_value(value));
            }
        }
    }

    /// Register explicit overrides, values taken verbatim
    pub fn apply_overrides(&mut self, overrides: &[Override]) {
        for o in overrides {
            self.set(o.key.clone(), o.value.clone());
        }
    }
}

/// Profile values containing whitespace are double-quoted
fn quote_profile_value(value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(CLAUSE_SEPARATOR)?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Which command-line flag an override came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideKind {
    Option,
    Setting,
}

/// An explicit `key=value` override passed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub key: String,
    pub value: String,
}

impl Override {
    /// Parse `key=value`. Exactly one `=` is required.
    pub fn parse(kind: OverrideKind, input: &str) -> Result<Self> {
        let mut parts = input.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => Ok(Self {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => Err(parse_error(kind, input)),
        }
    }

    pub fn parse_all(kind: OverrideKind, inputs: &[String]) -> Result<Vec<Self>> {
        inputs.iter().map(|i| Self::parse(kind, i)).collect()
    }
}

impl fmt::Display for Override {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

fn parse_error(kind: OverrideKind, input: &str) -> PinError {
    match kind {
        OverrideKind::Option => config::option_parse_failed(input),
        OverrideKind::Setting => config::setting_parse_failed(input),
    }
}

/// Build the search query from a profile file and explicit overrides.
///
/// Overrides are validated before the profile is read.
pub fn build_query(profile_path: &Path, options: &[String], settings: &[String]) -> Result<Query> {
    let options = Override::parse_all(OverrideKind::Option, options)?;
    let settings = Override::parse_all(OverrideKind::Setting, settings)?;

    let profile = ConanDocument::read(profile_path)
        .map_err(|e| config::profile_read_failed(profile_path.display().to_string(), e.to_string()))?;

    let mut query = Query::new();
    query.apply_profile(&profile);
    query.apply_overrides(&options);
    query.apply_overrides(&settings);
    Ok(query)
}
