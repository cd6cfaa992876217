//! Domain Entities
//!
//! - `VirtualFileTree` - in-memory output of one compilation
//! - `PackageModel` - compiled rules of one package
//! - `ProjectDescriptor` - the enclosing module's layout and dependencies

mod package_model;
mod project;
mod virtual_tree;

pub use package_model::{PackageModel, RuleModel, DEFAULT_PACKAGE};
pub use project::{Dependency, DependencyScope, ProjectDescriptor};
pub use virtual_tree::{VirtualFile, VirtualFileTree};
