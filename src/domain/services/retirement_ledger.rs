//! Retirement ledger
//!
//! Tracks which rule sources the run expected to delete and which it actually
//! deleted. The residual is reported, never treated as a failure.

use std::collections::BTreeSet;

use crate::domain::value_objects::PortablePath;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetirementLedger {
    expected: BTreeSet<PortablePath>,
    deleted: BTreeSet<PortablePath>,
}

impl RetirementLedger {
    pub fn new(expected: impl IntoIterator<Item = PortablePath>) -> Self {
        Self {
            expected: expected.into_iter().collect(),
            deleted: BTreeSet::new(),
        }
    }

    pub fn record_deleted(&mut self, path: PortablePath) {
        self.deleted.insert(path);
    }

    /// Expected paths that were not deleted.
    pub fn residual(&self) -> BTreeSet<PortablePath> {
        self.expected.difference(&self.deleted).cloned().collect()
    }
}
