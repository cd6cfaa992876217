//! WriteStrategy port - serializes compiled package models into source files
//!
//! This is the one pluggable seam of the pipeline. A strategy renders every
//! package into a scratch tree, copies the scratch tree's source folder into
//! the caller's target tree, and finally writes the module manifest.

use crate::domain::entities::{PackageModel, VirtualFileTree};
use crate::domain::value_objects::{ModuleIdentity, PortablePath};
use crate::error::RulegenResult;

/// What a strategy wrote into the target tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    /// Fully qualified names of the generated model classes
    pub model_files: Vec<String>,
    /// Location of the manifest listing them
    pub manifest: PortablePath,
}

pub trait WriteStrategy {
    /// Name used in configuration and error messages
    fn name(&self) -> &'static str;

    /// Render `packages` into `target` and write the manifest for `module`.
    fn write_model(
        &self,
        target: &mut VirtualFileTree,
        packages: &[PackageModel],
        module: &ModuleIdentity,
    ) -> RulegenResult<ModelFiles>;
}
