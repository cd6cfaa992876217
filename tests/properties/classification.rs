//! Property tests for artifact classification.

use proptest::prelude::*;

use rulegen::domain::services::ArtifactClassifier;
use rulegen::{ModuleIdentity, PortablePath, VirtualFileTree};

fn file_path() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec("[a-z]{1,8}", 0..=3),
        "[A-Za-z]{1,10}",
        prop_oneof![
            Just("java"),
            Just("drl"),
            Just("xml"),
            Just("properties"),
            Just("class")
        ],
    )
        .prop_map(|(dirs, stem, ext)| {
            let mut parts = dirs;
            parts.push(format!("{}.{}", stem, ext));
            parts.join("/")
        })
}

fn module() -> ModuleIdentity {
    ModuleIdentity::new("org.acme", "pricing", "1.0.0")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Generated and rule sets are disjoint, exclude the manifest and
    /// contain exactly the entries with their suffix.
    #[test]
    fn property_classification_partitions_by_suffix(
        paths in proptest::collection::btree_set(file_path(), 0..=24),
    ) {
        let module = module();
        let mut tree = VirtualFileTree::new();
        tree.write(module.manifest_path().unwrap(), "org.acme.pricing.Rules\n").unwrap();
        for path in &paths {
            tree.write_str(path, path.as_bytes().to_vec()).unwrap();
        }

        let classified = ArtifactClassifier::default().classify(&tree, &module).unwrap();

        prop_assert!(classified
            .generated_sources
            .is_disjoint(&classified.rule_sources));
        prop_assert!(!classified.generated_sources.contains(&classified.manifest));
        prop_assert!(!classified.rule_sources.contains(&classified.manifest));

        for path in &paths {
            let portable = PortablePath::parse(path).unwrap();
            prop_assert_eq!(
                classified.generated_sources.contains(&portable),
                path.ends_with(".java")
            );
            prop_assert_eq!(
                classified.rule_sources.contains(&portable),
                path.ends_with(".drl")
            );
        }
    }

    /// PROPERTY: Without the manifest, classification always fails.
    #[test]
    fn property_missing_manifest_is_an_error(
        paths in proptest::collection::btree_set(file_path(), 0..=12),
    ) {
        let mut tree = VirtualFileTree::new();
        for path in &paths {
            tree.write_str(path, "x").unwrap();
        }
        prop_assert!(ArtifactClassifier::default().classify(&tree, &module()).is_err());
    }
}
