//! Virtual File Tree entity
//!
//! In-memory mapping from portable relative path to file content. The rule
//! compiler fills one tree per run; the pipeline reads every entry once while
//! materializing and then drops the tree.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::value_objects::PortablePath;
use crate::error::{RulegenError, RulegenResult};

/// One immutable file in a virtual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    path: PortablePath,
    content: Arc<[u8]>,
}

impl VirtualFile {
    pub fn path(&self) -> &PortablePath {
        &self.path
    }

    /// File name without its folder.
    pub fn name(&self) -> &str {
        self.path.file_name()
    }

    /// Folder holding this file.
    pub fn folder(&self) -> PortablePath {
        self.path.parent()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// In-memory file tree keyed by portable path, iterated in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualFileTree {
    files: BTreeMap<PortablePath, VirtualFile>,
}

impl VirtualFileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `content` at `path`, replacing any previous entry.
    pub fn write(&mut self, path: PortablePath, content: impl Into<Vec<u8>>) -> RulegenResult<()> {
        if path.is_root() {
            return Err(RulegenError::InvalidVirtualPath {
                path: String::new(),
                reason: "a file needs a name",
            });
        }
        let content: Arc<[u8]> = content.into().into();
        self.files.insert(path.clone(), VirtualFile { path, content });
        Ok(())
    }

    /// Convenience wrapper parsing `path` first.
    pub fn write_str(&mut self, path: &str, content: impl Into<Vec<u8>>) -> RulegenResult<()> {
        self.write(PortablePath::parse(path)?, content)
    }

    pub fn get(&self, path: &PortablePath) -> Option<&VirtualFile> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &PortablePath) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PortablePath> {
        self.files.keys()
    }

    pub fn files(&self) -> impl Iterator<Item = &VirtualFile> {
        self.files.values()
    }

    /// Files below `folder`, at any depth.
    pub fn folder<'a>(&'a self, folder: &'a PortablePath) -> impl Iterator<Item = &'a VirtualFile> {
        self.files
            .values()
            .filter(move |f| f.path.starts_with(folder) && f.path != *folder)
    }

    /// Copy every file below `source` into `target`, rebased onto `destination`.
    ///
    /// Returns the number of copied files.
    pub fn copy_folder(
        &self,
        source: &PortablePath,
        target: &mut VirtualFileTree,
        destination: &PortablePath,
    ) -> usize {
        let mut copied = 0;
        for file in self.folder(source) {
            if let Some(rest) = file.path.strip_prefix(source) {
                let path = destination.join(&rest);
                target.files.insert(
                    path.clone(),
                    VirtualFile {
                        path,
                        content: Arc::clone(&file.content),
                    },
                );
                copied += 1;
            }
        }
        copied
    }
}
