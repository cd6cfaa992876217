//! Generate options

use std::collections::BTreeMap;

use crate::domain::value_objects::GenerationPolicy;

/// Dependency name that enables model generation
pub const DEFAULT_CAPABILITY_MARKER: &str = "rules-model-compiler";

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub policy: GenerationPolicy,
    /// A dependency with this name must be declared for generation to run
    pub capability_marker: String,
    /// Extension of original rule sources, without the dot
    pub rule_suffix: String,
    /// Extension of generated sources, without the dot
    pub generated_suffix: String,
    /// Placed in the process environment while the compiler runs
    pub properties: BTreeMap<String, String>,
    /// Compile and classify, but write and delete nothing
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            policy: GenerationPolicy::default(),
            capability_marker: DEFAULT_CAPABILITY_MARKER.to_string(),
            rule_suffix: "drl".to_string(),
            generated_suffix: "java".to_string(),
            properties: BTreeMap::new(),
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_capability_marker(mut self, marker: impl Into<String>) -> Self {
        self.capability_marker = marker.into();
        self
    }

    pub fn with_suffixes(mut self, rule: impl Into<String>, generated: impl Into<String>) -> Self {
        self.rule_suffix = rule.into();
        self.generated_suffix = generated.into();
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
