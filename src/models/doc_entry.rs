use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::paths::format_path_with_tilde_internal;

/// A documentation file discovered inside a plugin `doc` directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// Base file name, e.g. `fugitive.txt`. Used as the lookup and completion key.
    pub name: String,
    pub extension: String,
    /// Absolute path of the `doc` directory holding the file
    pub source_dir: PathBuf,
}

impl DocEntry {
    pub fn new(name: impl Into<String>, extension: impl Into<String>, source_dir: PathBuf) -> Self {
        Self { name: name.into(), extension: extension.into(), source_dir }
    }

    /// Full path of the file on disk
    pub fn path(&self) -> PathBuf {
        self.source_dir.join(&self.name)
    }

    /// Completion label: `name`, or `name:~/dir/doc` when verbose
    pub fn label(&self, verbose: bool) -> String {
        self.label_with_home(verbose, None)
    }

    pub(crate) fn label_with_home(&self, verbose: bool, home_override: Option<&str>) -> String {
        if !verbose {
            return self.name.clone();
        }
        let dir = format_path_with_tilde_internal(&self.source_dir, home_override);
        let dir = if dir.len() > 1 { dir.trim_end_matches('/') } else { dir.as_str() };
        format!("{}:{}", self.name, dir)
    }
}

/// All documentation entries gathered in one scan pass, in scan order.
///
/// Duplicate names across different `doc` directories are kept: each one is a
/// separate completion candidate and a separate lookup match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocIndex {
    entries: Vec<DocEntry>,
}

impl DocIndex {
    pub fn new(entries: Vec<DocEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full paths of every entry named exactly `name`, across all roots.
    ///
    /// An empty result is not an error; the caller decides how to report it.
    pub fn lookup_exact(&self, name: &str) -> Vec<PathBuf> {
        self.entries.iter().filter(|e| e.name == name).map(DocEntry::path).collect()
    }

    /// Completion labels for every entry, duplicates included
    pub fn list_labels(&self, verbose: bool) -> Vec<String> {
        self.entries.iter().map(|e| e.label(verbose)).collect()
    }

    #[cfg(test)]
    pub(crate) fn list_labels_with_home(&self, verbose: bool, home: Option<&str>) -> Vec<String> {
        self.entries.iter().map(|e| e.label_with_home(verbose, home)).collect()
    }

    /// Distinct `doc` directories that contributed at least one entry
    pub fn source_dirs(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = Vec::new();
        for entry in &self.entries {
            if !dirs.contains(&entry.source_dir.as_path()) {
                dirs.push(&entry.source_dir);
            }
        }
        dirs
    }
}
