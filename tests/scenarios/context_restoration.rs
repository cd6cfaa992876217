//! The classpath scope and system properties are restored after every run.

use rulegen::infrastructure::ContextSlot;

use crate::common::*;

const PROPERTY: &str = "RULEGEN_SCENARIO_DIALECT";

#[test]
fn scope_is_restored_after_success() {
    let project = TestProject::new(CONFIG).with_rules(PRICING_SOURCE, PRICING_DRL);
    let slot = ContextSlot::new();
    let before = slot.current();
    let mut config = project.config();
    config
        .generation
        .properties
        .insert(PROPERTY.to_string(), "mvel".to_string());

    project.generate_with(&config, &slot, false).unwrap();

    assert!(!slot.is_active());
    assert_eq!(*slot.current(), *before);
    assert!(std::env::var(PROPERTY).is_err());
}

#[test]
fn scope_is_restored_after_failure() {
    let project = TestProject::new(CONFIG).with_rules("org/acme/broken.drl", BROKEN_DRL);
    let slot = ContextSlot::new();
    let before = slot.current();

    assert!(project.generate_with(&project.config(), &slot, false).is_err());

    assert!(!slot.is_active());
    assert_eq!(*slot.current(), *before);
}

#[test]
fn unresolvable_dependency_aborts_before_compiling() {
    let config = format!(
        "{}\n[[dependencies]]\ngroup = \"org.acme\"\nname = \"facts\"\nversion = \"1.0.0\"\npath = \"lib/missing.jar\"\n",
        CONFIG
    );
    let project = TestProject::new(&config).with_rules(PRICING_SOURCE, PRICING_DRL);
    let slot = ContextSlot::new();

    let err = project
        .generate_with(&project.config(), &slot, false)
        .unwrap_err();

    assert!(matches!(
        err,
        rulegen::RulegenError::UnresolvableClasspathEntry { .. }
    ));
    assert!(!slot.is_active());
    assert_no_file(&project, "target");
}
