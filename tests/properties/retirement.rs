//! Property tests for source retirement bookkeeping.

use std::collections::BTreeSet;

use proptest::prelude::*;

use rulegen::domain::services::RetirementLedger;
use rulegen::PortablePath;

fn rule_path() -> impl Strategy<Value = PortablePath> {
    (proptest::collection::vec("[a-z]{1,6}", 0..=2), "[a-z]{1,6}").prop_map(|(dirs, stem)| {
        let mut parts = dirs;
        parts.push(format!("{}.drl", stem));
        PortablePath::parse(&parts.join("/")).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: residual == expected \ deleted, whatever else got deleted.
    #[test]
    fn property_residual_is_set_difference(
        expected in proptest::collection::btree_set(rule_path(), 0..=16),
        deleted in proptest::collection::btree_set(rule_path(), 0..=16),
    ) {
        let mut ledger = RetirementLedger::new(expected.clone());
        for path in &deleted {
            ledger.record_deleted(path.clone());
        }

        let want: BTreeSet<PortablePath> = expected.difference(&deleted).cloned().collect();
        prop_assert_eq!(ledger.residual(), want);
        prop_assert!(ledger.residual().is_subset(&expected));
        prop_assert!(ledger.residual().is_disjoint(&deleted));
    }

    /// PROPERTY: Deleting every expected path leaves no residual.
    #[test]
    fn property_full_deletion_is_complete(
        expected in proptest::collection::btree_set(rule_path(), 0..=16),
    ) {
        let mut ledger = RetirementLedger::new(expected.clone());
        for path in expected {
            ledger.record_deleted(path);
        }
        prop_assert!(ledger.residual().is_empty());
    }
}
