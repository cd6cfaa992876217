//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::GenerateModelUseCase;
use crate::config::Config;
use crate::domain::entities::ProjectDescriptor;
use crate::infrastructure::{strategy_for, ContextSlot, DrlCompiler, LocalFs};

/// Type alias for the concrete GenerateModelUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateModelUseCase<'static, DrlCompiler, LocalFs>;

/// Create a generate use case for `project`
///
/// Uses the built-in compiler, the local file system, the configured write
/// strategy and the process-wide context slot.
pub fn create_generate_use_case(
    project: &ProjectDescriptor,
    config: &Config,
) -> ConcreteGenerateUseCase {
    let compiler = DrlCompiler::new(
        config.generation.rule_suffix.as_str(),
        project.resource_dirs().to_vec(),
    );
    GenerateModelUseCase::new(
        compiler,
        LocalFs::new(),
        strategy_for(config.generation.strategy),
        ContextSlot::global(),
    )
}
