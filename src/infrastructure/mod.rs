//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `classpath` - classpath assembly and the scoped context slot
//! - `compiler/` - built-in rule-source compiler
//! - `fs/` - local file system and the run lock
//! - `writer/` - write strategies (canonical, per-rule)

pub mod classpath;
pub mod compiler;
pub mod fs;
pub mod writer;

pub use classpath::{resolve_classpath, ContextSlot, ScopedContext};
pub use compiler::DrlCompiler;
pub use fs::{LocalFs, RunLock};
pub use writer::{strategy_for, CanonicalModelWriter, PerRuleModelWriter, StrategyKind};
