//! Artifact classifier
//!
//! Partitions a virtual tree into generated sources, original rule sources and
//! the module manifest. Pure suffix matching, no side effects.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::VirtualFileTree;
use crate::domain::value_objects::{ModuleIdentity, PortablePath};
use crate::error::{RulegenError, RulegenResult};

/// The three disjoint artifact sets of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedArtifacts {
    pub generated_sources: BTreeSet<PortablePath>,
    pub rule_sources: BTreeSet<PortablePath>,
    pub manifest: PortablePath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactClassifier {
    generated_suffix: String,
    rule_suffix: String,
}

impl Default for ArtifactClassifier {
    fn default() -> Self {
        Self::new("java", "drl")
    }
}

impl ArtifactClassifier {
    /// Suffixes are extensions without the leading dot.
    pub fn new(generated_suffix: impl Into<String>, rule_suffix: impl Into<String>) -> Self {
        Self {
            generated_suffix: generated_suffix.into(),
            rule_suffix: rule_suffix.into(),
        }
    }

    /// Classify every entry of `tree`.
    ///
    /// The manifest is looked up directly at the path derived from `module`;
    /// a tree without it is an error. Entries matching neither suffix are
    /// ignored.
    pub fn classify(
        &self,
        tree: &VirtualFileTree,
        module: &ModuleIdentity,
    ) -> RulegenResult<ClassifiedArtifacts> {
        let manifest = module.manifest_path()?;
        if !tree.contains(&manifest) {
            return Err(RulegenError::ManifestMissing {
                path: manifest.to_string(),
            });
        }

        let mut generated_sources = BTreeSet::new();
        let mut rule_sources = BTreeSet::new();
        for path in tree.paths().filter(|p| **p != manifest) {
            match path.extension() {
                Some(ext) if ext == self.generated_suffix => {
                    generated_sources.insert(path.clone());
                }
                Some(ext) if ext == self.rule_suffix => {
                    rule_sources.insert(path.clone());
                }
                _ => {}
            }
        }

        Ok(ClassifiedArtifacts {
            generated_sources,
            rule_sources,
            manifest,
        })
    }
}
