//! RuleCompiler port - the external rule-source compiler
//!
//! The compiler parses and analyzes rule sources on its own; the pipeline only
//! hands it a module root, an exclusion predicate, the active classpath and a
//! write strategy, and receives a virtual tree plus diagnostics back.

use std::path::Path;

use super::WriteStrategy;
use crate::domain::entities::VirtualFileTree;
use crate::domain::value_objects::{ClasspathContext, Diagnostic, ModuleIdentity};

/// Input of one compilation.
pub struct CompileRequest<'a> {
    pub module_root: &'a Path,
    pub module: &'a ModuleIdentity,
    /// Returns `true` for source paths, relative to `module_root`, that must
    /// not be compiled
    pub exclude: &'a dyn Fn(&str) -> bool,
    pub classpath: &'a ClasspathContext,
}

/// Result of one compilation.
///
/// Compiler failures never surface as `Err`; they are collected here.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub tree: VirtualFileTree,
    pub module: ModuleIdentity,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    pub fn new(module: ModuleIdentity) -> Self {
        Self {
            tree: VirtualFileTree::new(),
            module,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// Builds a module into a virtual file tree.
pub trait RuleCompiler {
    /// Compile the module once; `strategy` is called back to render the model.
    fn compile(&self, request: &CompileRequest<'_>, strategy: &dyn WriteStrategy) -> BuildOutput;
}
