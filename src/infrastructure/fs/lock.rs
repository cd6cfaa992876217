//! Run-level lock
//!
//! One generation run owns the build output tree at a time. The lock is an
//! exclusive advisory lock on `<build>/.rulegen.lock`, released on drop.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{RulegenError, RulegenResult};

pub const LOCK_FILE_NAME: &str = ".rulegen.lock";

#[derive(Debug)]
pub struct RunLock {
    file: File,
    path: PathBuf,
}

impl RunLock {
    /// Block until the lock for `build_dir` is held.
    pub fn acquire(build_dir: &Path) -> RulegenResult<Self> {
        let path = build_dir.join(LOCK_FILE_NAME);
        let lock_err = |source| RulegenError::Lock {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(build_dir).map_err(lock_err)?;
        let file = File::create(&path).map_err(lock_err)?;
        file.lock_exclusive().map_err(lock_err)?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
