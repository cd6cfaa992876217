//! Built-in rule compiler
//!
//! A small reference implementation of the `RuleCompiler` port so the binary
//! works end to end without an external compiler.

mod drl;
mod parser;

pub use drl::DrlCompiler;
pub use parser::{parse_rule_source, ParsedRuleFile};
