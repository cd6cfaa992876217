//! Generate Model Use Case
//!
//! Orchestrates one generation run:
//! - Checking the policy and the capability marker
//! - Entering the classpath scope (released on every exit path)
//! - Compiling, classifying and materializing the model
//! - Optionally retiring the original rule sources

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::{GenerateOutcome, GenerateReport, PipelineStage};
pub use use_case::{generated_sources_root, GenerateModelUseCase};
