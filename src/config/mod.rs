//! Configuration module for Rulegen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RULEGEN_*)
//! 3. Project config (`rulegen.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, ENV_GENERATE_MODEL, ENV_STRATEGY};
pub use types::{
    BuildConfig, Config, DependencyConfig, GenerationConfig, ModuleConfig, CONFIG_FILE_NAME,
};
