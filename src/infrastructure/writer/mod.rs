//! Write strategies
//!
//! Every strategy renders each package into a fresh scratch tree and only
//! copies the scratch tree's source folder into the target tree once the whole
//! package rendered, so a failing package leaves nothing half-written behind.
//! The manifest is written last.

mod canonical;
mod java;
mod per_rule;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{PackageModel, VirtualFileTree};
use crate::domain::ports::{ModelFiles, WriteStrategy};
use crate::domain::value_objects::{ModuleIdentity, PortablePath};
use crate::error::{RulegenError, RulegenResult};

pub use canonical::CanonicalModelWriter;
pub use per_rule::PerRuleModelWriter;

/// Folder of the scratch tree that holds generated sources.
pub const SCRATCH_SOURCE_FOLDER: &str = "src/main/java";

/// Which write strategy a project uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// One `Rules` class per package
    #[default]
    Canonical,
    /// One class per rule plus a package index
    PerRule,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Canonical => "canonical",
            StrategyKind::PerRule => "per-rule",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = RulegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(StrategyKind::Canonical),
            "per-rule" | "per_rule" => Ok(StrategyKind::PerRule),
            _ => Err(RulegenError::InvalidStrategy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instantiate the strategy selected by configuration.
pub fn strategy_for(kind: StrategyKind) -> Box<dyn WriteStrategy> {
    match kind {
        StrategyKind::Canonical => Box::new(CanonicalModelWriter),
        StrategyKind::PerRule => Box::new(PerRuleModelWriter),
    }
}

/// A rendered source file: package-relative path and content.
pub(crate) struct RenderedSource {
    pub path: String,
    pub content: String,
    /// Fully qualified class name, if the file is a model entry point
    pub model_class: Option<String>,
}

/// Shared driver: scratch tree per package, bulk copy, manifest last.
pub(crate) fn write_packages(
    strategy: &str,
    target: &mut VirtualFileTree,
    packages: &[PackageModel],
    module: &ModuleIdentity,
    render: impl Fn(&PackageModel, &ModuleIdentity) -> Vec<RenderedSource>,
) -> RulegenResult<ModelFiles> {
    let source_folder = PortablePath::parse(SCRATCH_SOURCE_FOLDER)?;
    let mut model_files = Vec::new();

    for package in packages {
        let mut scratch = VirtualFileTree::new();
        let package_folder = PortablePath::parse(&package.folder()).map_err(|e| {
            RulegenError::Strategy {
                strategy: strategy.to_string(),
                package: package.name().to_string(),
                message: e.to_string(),
            }
        })?;

        let mut package_models = Vec::new();
        for source in render(package, module) {
            let path = source_folder
                .join(&package_folder)
                .join(&PortablePath::parse(&source.path)?);
            scratch.write(path, source.content)?;
            package_models.extend(source.model_class);
        }

        let copied = scratch.copy_folder(&source_folder, target, &PortablePath::root());
        tracing::trace!(package = package.name(), files = copied, "package rendered");
        model_files.extend(package_models);
    }

    let manifest = write_manifest(target, &model_files, module)?;
    Ok(ModelFiles {
        model_files,
        manifest,
    })
}

/// Write the manifest listing `model_files`, one per line.
pub(crate) fn write_manifest(
    target: &mut VirtualFileTree,
    model_files: &[String],
    module: &ModuleIdentity,
) -> RulegenResult<PortablePath> {
    let path = module.manifest_path()?;
    let mut content = String::new();
    for file in model_files {
        content.push_str(file);
        content.push('\n');
    }
    target.write(path.clone(), content)?;
    Ok(path)
}
