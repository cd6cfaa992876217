//! Portable path value object
//!
//! Virtual file trees key their entries by a platform-independent relative
//! path: forward slashes only, no empty, `.` or `..` segments, never absolute.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::{RulegenError, RulegenResult};

/// Normalized, relative, `/`-separated path.
///
/// The empty path denotes the root folder of a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PortablePath(String);

impl PortablePath {
    /// The root folder.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parse a path written with either separator.
    pub fn parse(raw: &str) -> RulegenResult<Self> {
        let normalized = raw.replace('\\', "/");
        if normalized.starts_with('/') {
            return Err(RulegenError::InvalidVirtualPath {
                path: raw.to_string(),
                reason: "absolute paths are not portable",
            });
        }

        let mut segments = Vec::new();
        for segment in normalized.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(RulegenError::InvalidVirtualPath {
                        path: raw.to_string(),
                        reason: "parent segments are not allowed",
                    })
                }
                s if s.contains(':') => {
                    return Err(RulegenError::InvalidVirtualPath {
                        path: raw.to_string(),
                        reason: "drive prefixes are not portable",
                    })
                }
                s => segments.push(s),
            }
        }
        Ok(Self(segments.join("/")))
    }

    /// Build a portable path from a native relative path.
    pub fn from_relative(path: &Path) -> RulegenResult<Self> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => {
                    let part = part.to_str().ok_or_else(|| RulegenError::InvalidVirtualPath {
                        path: path.display().to_string(),
                        reason: "path is not valid UTF-8",
                    })?;
                    segments.push(part.to_string());
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(RulegenError::InvalidVirtualPath {
                        path: path.display().to_string(),
                        reason: "path must be relative and stay inside its root",
                    })
                }
            }
        }
        Self::parse(&segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Last segment, or `""` for the root.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Extension of the last segment, without the dot.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    /// Enclosing folder; the root is its own parent.
    pub fn parent(&self) -> PortablePath {
        match self.0.rfind('/') {
            Some(idx) => Self(self.0[..idx].to_string()),
            None => Self::root(),
        }
    }

    pub fn join(&self, other: &PortablePath) -> PortablePath {
        match (self.is_root(), other.is_root()) {
            (true, _) => other.clone(),
            (false, true) => self.clone(),
            (false, false) => Self(format!("{}/{}", self.0, other.0)),
        }
    }

    /// Segment-wise prefix test: `a/b` is inside `a` but not inside `a/bc`.
    pub fn starts_with(&self, folder: &PortablePath) -> bool {
        self.strip_prefix(folder).is_some()
    }

    pub fn strip_prefix(&self, folder: &PortablePath) -> Option<PortablePath> {
        if folder.is_root() {
            return Some(self.clone());
        }
        if self.0 == folder.0 {
            return Some(Self::root());
        }
        self.0
            .strip_prefix(folder.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|rest| Self(rest.to_string()))
    }

    /// Resolve against a native directory.
    pub fn to_native(&self, root: &Path) -> PathBuf {
        self.segments().fold(root.to_path_buf(), |acc, s| acc.join(s))
    }
}

impl fmt::Display for PortablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PortablePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
