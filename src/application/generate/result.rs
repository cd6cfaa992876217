//! Generate result types

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::application::materialize::WrittenFile;
use crate::application::retire::RetirementReport;
use crate::domain::value_objects::{Diagnostic, GenerationPolicy, ModuleIdentity};

/// Stages of one run, in order. Any failure jumps straight to `ContextExited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    Idle,
    ContextEntered,
    Compiled,
    Classified,
    Materialized,
    Retired,
    ContextExited,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::ContextEntered => "context-entered",
            PipelineStage::Compiled => "compiled",
            PipelineStage::Classified => "classified",
            PipelineStage::Materialized => "materialized",
            PipelineStage::Retired => "retired",
            PipelineStage::ContextExited => "context-exited",
        };
        f.write_str(name)
    }
}

/// What a generate run did.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerateOutcome {
    /// The policy disables generation
    Skipped { policy: GenerationPolicy },
    /// Generation was requested but the capability marker is not a dependency
    CapabilityMissing { marker: String },
    Generated(GenerateReport),
}

impl GenerateOutcome {
    pub fn report(&self) -> Option<&GenerateReport> {
        match self {
            GenerateOutcome::Generated(report) => Some(report),
            _ => None,
        }
    }
}

/// Files produced by a successful run
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub module: ModuleIdentity,
    pub strategy: String,
    pub dry_run: bool,
    pub generated: Vec<WrittenFile>,
    pub manifest: WrittenFile,
    /// Root registered as an additional compile source root
    pub source_root: PathBuf,
    /// `None` unless the policy retires sources
    pub retirement: Option<RetirementReport>,
    pub warnings: Vec<Diagnostic>,
}

impl GenerateReport {
    pub fn generated_count(&self) -> usize {
        self.generated.len()
    }

    pub fn deleted_count(&self) -> usize {
        self.retirement.as_ref().map_or(0, |r| r.deleted.len())
    }
}
