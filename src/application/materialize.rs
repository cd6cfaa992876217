//! Filesystem materializer
//!
//! Writes virtual files below a destination root. Each destination is removed
//! first and then rewritten, so repeated runs over the same tree leave
//! byte-identical files. A failure aborts the batch; files written before it
//! stay on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::VirtualFile;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ContentHash;
use crate::error::{RulegenError, RulegenResult};

/// A file written (or, in a dry run, planned) on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub hash: ContentHash,
    pub bytes: usize,
}

pub struct Materializer<'f, FS: FileSystem + ?Sized> {
    fs: &'f FS,
}

impl<'f, FS: FileSystem + ?Sized> Materializer<'f, FS> {
    pub fn new(fs: &'f FS) -> Self {
        Self { fs }
    }

    /// Write `files` below `destination_root`.
    pub fn materialize<'t>(
        &self,
        files: impl IntoIterator<Item = &'t VirtualFile>,
        destination_root: &Path,
    ) -> RulegenResult<Vec<WrittenFile>> {
        let mut written = Vec::new();
        for file in files {
            let path = destination(file, destination_root);
            self.write_one(&path, file.content())?;
            tracing::info!("Generating {}", path.display());
            written.push(describe(path, file));
        }
        Ok(written)
    }

    fn write_one(&self, path: &Path, content: &[u8]) -> RulegenResult<()> {
        let fail = |source| RulegenError::Write {
            path: path.to_path_buf(),
            source,
        };

        match self.fs.remove(path) {
            Ok(()) => tracing::trace!(path = %path.display(), "replaced existing file"),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(fail(e)),
        }
        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent).map_err(fail)?;
        }
        self.fs.write(path, content).map_err(fail)
    }
}

/// Destinations and hashes `materialize` would produce, without any I/O.
pub fn plan<'t>(
    files: impl IntoIterator<Item = &'t VirtualFile>,
    destination_root: &Path,
) -> Vec<WrittenFile> {
    files
        .into_iter()
        .map(|file| describe(destination(file, destination_root), file))
        .collect()
}

/// Physical path of `file`: its folder below `root`, then its name.
fn destination(file: &VirtualFile, root: &Path) -> PathBuf {
    file.folder().to_native(root).join(file.name())
}

fn describe(path: PathBuf, file: &VirtualFile) -> WrittenFile {
    WrittenFile {
        path,
        hash: ContentHash::from_bytes(file.content()),
        bytes: file.len(),
    }
}
