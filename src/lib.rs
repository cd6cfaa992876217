//! Rulegen - rule model generator
//!
//! Rulegen compiles a project's declarative rule sources into an executable,
//! statically typed model and materializes the generated sources into the
//! project's build tree so a downstream compiler can pick them up.
//!
//! The pipeline runs in three phases: an isolated classpath scope is entered,
//! the rule compiler builds an in-memory tree through a pluggable write
//! strategy, and the classified artifacts are synced to disk.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::generate::{
    GenerateModelUseCase, GenerateOptions, GenerateOutcome, GenerateReport,
};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{ProjectDescriptor, VirtualFileTree};
pub use domain::ports::{RuleCompiler, WriteStrategy};
pub use domain::value_objects::{GenerationPolicy, ModuleIdentity, PortablePath};
pub use error::{RulegenError, RulegenResult};
