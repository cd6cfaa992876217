//! Value Objects
//!
//! Immutable types without identity.

mod classpath;
mod content_hash;
mod diagnostic;
mod generation_policy;
mod module_identity;
mod portable_path;

pub use classpath::{ClasspathContext, ClasspathEntry};
pub use content_hash::ContentHash;
pub use diagnostic::{Diagnostic, Severity};
pub use generation_policy::GenerationPolicy;
pub use module_identity::{ModuleIdentity, MANIFEST_FILE_NAME};
pub use portable_path::PortablePath;
