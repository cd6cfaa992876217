//! Generation orchestrator
//!
//! Runs the rule compiler exactly once and turns any error diagnostic into a
//! hard failure, so nothing downstream ever sees a partial tree.

use std::path::Path;

use crate::domain::entities::VirtualFileTree;
use crate::domain::ports::{CompileRequest, RuleCompiler, WriteStrategy};
use crate::domain::value_objects::{ClasspathContext, Diagnostic, ModuleIdentity};
use crate::error::{RulegenError, RulegenResult};

/// Output of a successful compilation.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    pub tree: VirtualFileTree,
    /// Identity reported by the compiler
    pub module: ModuleIdentity,
    pub warnings: Vec<Diagnostic>,
}

pub struct GenerationOrchestrator<'c, C: RuleCompiler + ?Sized> {
    compiler: &'c C,
}

impl<'c, C: RuleCompiler + ?Sized> GenerationOrchestrator<'c, C> {
    pub fn new(compiler: &'c C) -> Self {
        Self { compiler }
    }

    /// Compile the module rooted at `module_root` with `strategy`.
    pub fn generate(
        &self,
        module_root: &Path,
        module: &ModuleIdentity,
        exclude: &dyn Fn(&str) -> bool,
        strategy: &dyn WriteStrategy,
        classpath: &ClasspathContext,
    ) -> RulegenResult<GeneratedModule> {
        let request = CompileRequest {
            module_root,
            module,
            exclude,
            classpath,
        };
        tracing::debug!(root = %module_root.display(), strategy = strategy.name(), "compiling rule sources");
        let output = self.compiler.compile(&request, strategy);

        for warning in output.warnings() {
            tracing::warn!("{}", warning);
        }

        if output.has_errors() {
            return Err(RulegenError::CompilationFailed {
                diagnostics: output.errors().cloned().collect(),
            });
        }

        let warnings = output.warnings().cloned().collect();
        Ok(GeneratedModule {
            tree: output.tree,
            module: output.module,
            warnings,
        })
    }
}
