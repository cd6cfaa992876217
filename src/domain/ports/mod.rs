//! Ports
//!
//! Interfaces the application layer depends on; infrastructure implements them.

pub mod file_system;
pub mod rule_compiler;
pub mod write_strategy;

pub use file_system::{FileSystem, FsError, FsResult};
pub use rule_compiler::{BuildOutput, CompileRequest, RuleCompiler};
pub use write_strategy::{ModelFiles, WriteStrategy};
