//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateModelUseCase` - policy check, classpath scope, compile, classify,
//!   materialize, retire
//!
//! ## Services
//!
//! - `GenerationOrchestrator` - runs the compiler once, fails on any error
//! - `Materializer` - idempotent writes below a destination root
//! - `SourceRetirement` - deletes rule sources and reports the residual

pub mod generate;
pub mod materialize;
pub mod orchestrator;
pub mod retire;

pub use generate::{
    generated_sources_root, GenerateModelUseCase, GenerateOptions, GenerateOutcome,
    GenerateReport, PipelineStage,
};
pub use materialize::{Materializer, WrittenFile};
pub use orchestrator::{GeneratedModule, GenerationOrchestrator};
pub use retire::{RetirementReport, SourceRetirement};
