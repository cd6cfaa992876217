//! Common test utilities for Rulegen integration and scenario tests.
//!
//! This module provides:
//! - `TestProject`: an isolated module layout in a temp directory
//! - Assertions: `assert_file`, `assert_no_file`
//! - Fixtures: reusable configuration and rule sources

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod project;

pub use assertions::*;
pub use fixtures::*;
pub use project::*;
