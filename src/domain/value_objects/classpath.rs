//! Classpath context value object
//!
//! An ordered, deduplicated set of locations the rule compiler may resolve
//! symbols against while a generation scope is active.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One resolvable location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum ClasspathEntry {
    /// Directory of compiled classes or resources
    Directory(PathBuf),
    /// Packaged artifact (jar, zip, ...)
    Archive(PathBuf),
}

impl ClasspathEntry {
    pub fn path(&self) -> &Path {
        match self {
            ClasspathEntry::Directory(p) | ClasspathEntry::Archive(p) => p,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, ClasspathEntry::Directory(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClasspathContext {
    entries: Vec<ClasspathEntry>,
}

impl ClasspathContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless one with the same path is already present.
    ///
    /// Returns `false` for duplicates.
    pub fn push(&mut self, entry: ClasspathEntry) -> bool {
        if self.contains(entry.path()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.path() == path)
    }

    pub fn entries(&self) -> &[ClasspathEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_archives(&self) -> bool {
        self.entries.iter().any(|e| !e.is_directory())
    }

    /// Find `relative` inside the directory entries, first match wins.
    ///
    /// Archives are opaque here.
    pub fn locate(&self, relative: &str) -> Option<PathBuf> {
        self.entries
            .iter()
            .filter(|e| e.is_directory())
            .map(|e| e.path().join(relative))
            .find(|candidate| candidate.exists())
    }
}
