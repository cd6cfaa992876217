//! Project descriptor entity
//!
//! What the enclosing build supplies before a run: module identity, build
//! layout, resolved dependencies. The pipeline mutates it only by registering
//! extra compile source roots.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ModuleIdentity;

/// Dependency scope, as declared by the enclosing build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    #[default]
    Compile,
    Runtime,
    Provided,
    System,
    Test,
}

impl DependencyScope {
    /// Cumulative compile + runtime scope: everything but `test`.
    pub fn on_generation_classpath(self) -> bool {
        !matches!(self, DependencyScope::Test)
    }
}

/// A resolved (or unresolved) dependency of the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub identity: ModuleIdentity,
    pub scope: DependencyScope,
    /// Resolved artifact file, if the build resolved one
    pub path: Option<PathBuf>,
}

impl Dependency {
    pub fn new(identity: ModuleIdentity, scope: DependencyScope, path: Option<PathBuf>) -> Self {
        Self {
            identity,
            scope,
            path,
        }
    }
}

/// Build layout and dependency view of one module.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    root: PathBuf,
    module: ModuleIdentity,
    build_dir: PathBuf,
    output_dir: PathBuf,
    test_source_dir: PathBuf,
    resource_dirs: Vec<PathBuf>,
    dependencies: Vec<Dependency>,
    compile_source_roots: Vec<PathBuf>,
}

impl ProjectDescriptor {
    /// Create a descriptor with the conventional layout below `root`.
    pub fn new(root: impl Into<PathBuf>, module: ModuleIdentity) -> Self {
        let root = root.into();
        Self {
            build_dir: root.join("target"),
            output_dir: root.join("target").join("classes"),
            test_source_dir: root.join("src").join("test"),
            resource_dirs: vec![
                root.join("src").join("main").join("resources"),
                root.join("src").join("test").join("resources"),
            ],
            compile_source_roots: vec![root.join("src").join("main").join("java")],
            dependencies: Vec::new(),
            root,
            module,
        }
    }

    pub fn with_build_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_test_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_source_dir = dir.into();
        self
    }

    pub fn with_resource_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.resource_dirs = dirs;
        self
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn module(&self) -> &ModuleIdentity {
        &self.module
    }

    /// Build output directory (`target`)
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Compiled classes directory (`target/classes`)
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn test_source_dir(&self) -> &Path {
        &self.test_source_dir
    }

    pub fn resource_dirs(&self) -> &[PathBuf] {
        &self.resource_dirs
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Whether a dependency with artifact name `name` is declared.
    pub fn has_dependency_named(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d.identity.name == name)
    }

    /// Register an additional compilable source root; duplicates are ignored.
    pub fn add_compile_source_root(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.compile_source_roots.contains(&path) {
            self.compile_source_roots.push(path);
        }
    }

    pub fn compile_source_roots(&self) -> &[PathBuf] {
        &self.compile_source_roots
    }
}
