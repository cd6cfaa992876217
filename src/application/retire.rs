//! Source retirement
//!
//! Deletes original rule sources from the compiled-output tree once the model
//! was generated, then reconciles what was deleted against what the run
//! expected to delete. A failed deletion is fatal; an expected file that was
//! not found is only reported.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use serde::Serialize;

use crate::domain::ports::FileSystem;
use crate::domain::services::RetirementLedger;
use crate::domain::value_objects::PortablePath;
use crate::error::{RulegenError, RulegenResult};

/// Outcome of one retirement pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RetirementReport {
    pub search_root: PathBuf,
    /// Deleted files (or, in a dry run, files that would be deleted)
    pub deleted: Vec<PathBuf>,
    /// Expected sources that were not found below the search root
    pub residual: Vec<PortablePath>,
}

impl RetirementReport {
    pub fn is_complete(&self) -> bool {
        self.residual.is_empty()
    }
}

pub struct SourceRetirement<'f, FS: FileSystem + ?Sized> {
    fs: &'f FS,
    search_root: PathBuf,
    matcher: Gitignore,
}

impl<'f, FS: FileSystem + ?Sized> SourceRetirement<'f, FS> {
    /// Match `*.<rule_suffix>` at any depth below `search_root`.
    pub fn new(fs: &'f FS, search_root: &Path, rule_suffix: &str) -> RulegenResult<Self> {
        let glob = format!("*.{}", rule_suffix);
        let mut builder = GitignoreBuilder::new(search_root);
        builder
            .add_line(None, &glob)
            .map_err(|e| walk_error(search_root, e))?;
        let matcher = builder.build().map_err(|e| walk_error(search_root, e))?;

        Ok(Self {
            fs,
            search_root: search_root.to_path_buf(),
            matcher,
        })
    }

    /// Delete every match and report which of `expected` were not deleted.
    pub fn retire(&self, expected: &BTreeSet<PortablePath>) -> RulegenResult<RetirementReport> {
        self.run(expected, true)
    }

    /// Report what `retire` would delete, deleting nothing.
    pub fn plan(&self, expected: &BTreeSet<PortablePath>) -> RulegenResult<RetirementReport> {
        self.run(expected, false)
    }

    fn run(&self, expected: &BTreeSet<PortablePath>, delete: bool) -> RulegenResult<RetirementReport> {
        let mut ledger = RetirementLedger::new(expected.iter().cloned());
        let mut deleted = Vec::new();

        for path in self.matches()? {
            if delete {
                self.fs
                    .remove(&path)
                    .map_err(|source| RulegenError::Retirement {
                        path: path.clone(),
                        source,
                    })?;
                tracing::debug!(path = %path.display(), "rule source deleted");
            }
            if let Some(relative) = self.relative(&path) {
                ledger.record_deleted(relative);
            }
            deleted.push(path);
        }

        let residual: Vec<PortablePath> = ledger.residual().into_iter().collect();
        if !residual.is_empty() {
            let listed: Vec<&str> = residual.iter().map(PortablePath::as_str).collect();
            tracing::warn!("Base directory: {}", self.search_root.display());
            tracing::warn!("Files not deleted: {}", listed.join(", "));
        }

        Ok(RetirementReport {
            search_root: self.search_root.clone(),
            deleted,
            residual,
        })
    }

    fn matches(&self) -> RulegenResult<Vec<PathBuf>> {
        let files = self
            .fs
            .walk_files(&self.search_root)
            .map_err(|e| walk_error(&self.search_root, e))?;
        Ok(files
            .into_iter()
            .filter(|path| self.matcher.matched(path, false).is_ignore())
            .collect())
    }

    fn relative(&self, path: &Path) -> Option<PortablePath> {
        let relative = path.strip_prefix(&self.search_root).ok()?;
        PortablePath::from_relative(relative).ok()
    }
}

fn walk_error(root: &Path, err: impl std::fmt::Display) -> RulegenError {
    RulegenError::Walk {
        root: root.to_path_buf(),
        message: err.to_string(),
    }
}
