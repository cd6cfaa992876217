//! In-memory file system with failure injection (tests only)

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    /// Writes succeed this many times, then fail with a disk-full error
    pub writes_before_failure: Arc<Mutex<Option<usize>>>,
    /// Paths whose removal fails with permission denied
    pub undeletable: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.to_vec());
        self
    }

    pub fn fail_writes_after(self, count: usize) -> Self {
        *self.writes_before_failure.lock().unwrap() = Some(count);
        self
    }

    pub fn deny_removal_of(self, path: impl Into<PathBuf>) -> Self {
        self.undeletable.lock().unwrap().insert(path.into());
        self
    }

    pub fn content(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl FileSystem for MockFileSystem {
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut budget = self.writes_before_failure.lock().unwrap();
        if let Some(remaining) = budget.as_mut() {
            if *remaining == 0 {
                return Err(FsError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::other("no space left on device"),
                });
            }
            *remaining -= 1;
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.content(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        if self.undeletable.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        match self.files.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }

    fn walk_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}
