//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::generate::GenerateOptions;
use crate::domain::entities::{Dependency, DependencyScope, ProjectDescriptor};
use crate::domain::value_objects::{GenerationPolicy, ModuleIdentity};
use crate::error::{RulegenError, RulegenResult};
use crate::infrastructure::writer::StrategyKind;

use super::loader::{self, ConfigWarning};

/// Project configuration file, looked up at the project root
pub const CONFIG_FILE_NAME: &str = "rulegen.toml";

/// Identity of the module being built
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ModuleConfig {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// One `[[dependencies]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyConfig {
    pub group: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub scope: DependencyScope,
    /// Resolved artifact file (directory or archive), relative to the project root
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Build layout, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildConfig {
    #[serde(default = "default_build_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    #[serde(default = "default_test_source_directory")]
    pub test_source_directory: PathBuf,

    #[serde(default = "default_resource_directories")]
    pub resource_directories: Vec<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            directory: default_build_directory(),
            output_directory: default_output_directory(),
            test_source_directory: default_test_source_directory(),
            resource_directories: default_resource_directories(),
        }
    }
}

fn default_build_directory() -> PathBuf {
    PathBuf::from("target")
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("target/classes")
}

fn default_test_source_directory() -> PathBuf {
    PathBuf::from("src/test")
}

fn default_resource_directories() -> Vec<PathBuf> {
    vec![
        PathBuf::from("src/main/resources"),
        PathBuf::from("src/test/resources"),
    ]
}

/// Model generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationConfig {
    #[serde(default)]
    pub policy: GenerationPolicy,

    #[serde(default)]
    pub strategy: StrategyKind,

    #[serde(default = "default_capability_marker")]
    pub capability_marker: String,

    #[serde(default = "default_rule_suffix")]
    pub rule_suffix: String,

    #[serde(default = "default_generated_suffix")]
    pub generated_suffix: String,

    /// System properties placed in the environment while the compiler runs
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            policy: GenerationPolicy::default(),
            strategy: StrategyKind::default(),
            capability_marker: default_capability_marker(),
            rule_suffix: default_rule_suffix(),
            generated_suffix: default_generated_suffix(),
            properties: BTreeMap::new(),
        }
    }
}

fn default_capability_marker() -> String {
    "rules-model-compiler".to_string()
}

fn default_rule_suffix() -> String {
    "drl".to_string()
}

fn default_generated_suffix() -> String {
    "java".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub module: ModuleConfig,

    #[serde(default)]
    pub dependencies: Vec<DependencyConfig>,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RulegenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RulegenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (RULEGEN_* prefix)
    pub fn with_env_overrides(self) -> RulegenResult<Self> {
        loader::with_env_overrides(self)
    }

    /// Module identity; every coordinate must be set.
    pub fn module_identity(&self) -> RulegenResult<ModuleIdentity> {
        let required = |value: &Option<String>, key: &str| match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(RulegenError::InvalidConfig {
                file: PathBuf::from(CONFIG_FILE_NAME),
                message: format!("[module] {} is required", key),
            }),
        };
        Ok(ModuleIdentity::new(
            required(&self.module.group, "group")?,
            required(&self.module.name, "name")?,
            required(&self.module.version, "version")?,
        ))
    }

    /// Project descriptor with every configured path resolved against `root`.
    pub fn into_project(&self, root: &Path) -> RulegenResult<ProjectDescriptor> {
        let build = &self.build;
        let mut project = ProjectDescriptor::new(root, self.module_identity()?)
            .with_build_dir(root.join(&build.directory))
            .with_output_dir(root.join(&build.output_directory))
            .with_test_source_dir(root.join(&build.test_source_directory))
            .with_resource_dirs(
                build
                    .resource_directories
                    .iter()
                    .map(|dir| root.join(dir))
                    .collect(),
            );

        for dep in &self.dependencies {
            project = project.with_dependency(Dependency::new(
                ModuleIdentity::new(&dep.group, &dep.name, &dep.version),
                dep.scope,
                dep.path.clone(),
            ));
        }
        Ok(project)
    }

    pub fn generate_options(&self, dry_run: bool) -> GenerateOptions {
        let generation = &self.generation;
        GenerateOptions {
            policy: generation.policy,
            capability_marker: generation.capability_marker.clone(),
            rule_suffix: generation.rule_suffix.clone(),
            generated_suffix: generation.generated_suffix.clone(),
            properties: generation.properties.clone(),
            dry_run,
        }
    }
}
