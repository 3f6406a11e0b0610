//! Reader for Conan's INI-like documents (profiles, `conaninfo.txt`)
//!
//! The format is a relaxed INI dialect:
//! - `[name]` opens a section; a repeated section merges into the first one
//! - `key=value` splits at the first `=`, both sides trimmed
//! - a line without `=` is a key with no value (`full_requires` entries)
//! - blank lines and lines starting with `#` or `;` are skipped
//! - lines before the first section header are ignored

use std::path::Path;

/// A single `key[=value]` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Option<String>,
}

/// A named section and its entries in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Later duplicates replace the value but keep the original position
    fn upsert(&mut self, key: String, value: Option<String>) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value,
            None => self.entries.push(Entry { key, value }),
        }
    }
}

/// Parsed Conan document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConanDocument {
    sections: Vec<Section>,
}

impl ConanDocument {
    /// Parse document text. Never fails: unrecognized lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut doc = Self::default();
        let mut current: Option<usize> = None;

        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = section_header(line) {
                current = Some(doc.section_index(name));
                continue;
            }

            let Some(index) = current else {
                tracing::debug!(line, "Skipping line outside of any section");
                continue;
            };

            let (key, value) = match line.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim().to_string())),
                None => (line, None),
            };
            doc.sections[index].upsert(key.to_string(), value);
        }

        doc
    }

    /// Read and parse a document from disk
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    fn section_index(&mut self, name: &str) -> usize {
        if let Some(index) = self.sections.iter().position(|s| s.name == name) {
            return index;
        }
        self.sections.push(Section::new(name));
        self.sections.len() - 1
    }
}

fn section_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    (!name.is_empty()).then_some(name)
}
