//! Error types for Rulegen
//!
//! Uses `thiserror` for library errors. Every filesystem failure carries the
//! offending path so callers can diagnose a run without the sources.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::Diagnostic;

/// Result type alias for Rulegen operations
pub type RulegenResult<T> = Result<T, RulegenError>;

/// Main error type for Rulegen operations
#[derive(Error, Debug)]
pub enum RulegenError {
    /// A dependency location could not be resolved to a local path
    #[error("cannot resolve classpath entry for {artifact}: {path} does not exist")]
    UnresolvableClasspathEntry { artifact: String, path: PathBuf },

    /// A classpath scope is already active in this process
    #[error("a generation run is already active in this process")]
    ContextBusy,

    /// The rule compiler reported at least one error
    #[error("rule compilation failed with {} error(s):\n{}", .diagnostics.len(), render_diagnostics(.diagnostics))]
    CompilationFailed { diagnostics: Vec<Diagnostic> },

    /// The write strategy did not produce the module manifest
    #[error("model manifest '{path}' is missing from the generated tree")]
    ManifestMissing { path: String },

    /// A virtual path could not be normalized
    #[error("invalid virtual path '{path}': {reason}")]
    InvalidVirtualPath { path: String, reason: &'static str },

    /// A write strategy failed for one package
    #[error("write strategy '{strategy}' failed for package '{package}': {message}")]
    Strategy {
        strategy: String,
        package: String,
        message: String,
    },

    /// Writing a generated artifact failed
    #[error("unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Deleting a matched rule source failed
    #[error("unable to delete {path}: {source}")]
    Retirement {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Walking a directory tree failed
    #[error("unable to scan {root}: {message}")]
    Walk { root: PathBuf, message: String },

    /// The run lock could not be acquired
    #[error("unable to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A system property cannot be placed in the process environment
    #[error("invalid system property '{key}': {reason}")]
    InvalidProperty { key: String, reason: &'static str },

    /// Unknown generation policy name
    #[error("unknown generation policy '{value}' (expected SKIP_MODEL, YES or YES_WITHDRL)")]
    InvalidPolicy { value: String },

    /// Unknown write strategy name
    #[error("unknown write strategy '{value}' (expected canonical or per-rule)")]
    InvalidStrategy { value: String },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  {}", d))
        .collect::<Vec<_>>()
        .join("\n")
}
