//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod classifier;
mod retirement_ledger;
mod source_filter;

pub use classifier::{ArtifactClassifier, ClassifiedArtifacts};
pub use retirement_ledger::RetirementLedger;
pub use source_filter::TestSourceFilter;
