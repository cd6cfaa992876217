//! One rule source, one package: generate, register, retire.

use rulegen::application::GenerateOutcome;
use rulegen::config::Config;
use rulegen::infrastructure::{ContextSlot, StrategyKind};
use rulegen::GenerationPolicy;

use crate::common::*;

fn project() -> TestProject {
    let project = TestProject::new(CONFIG).with_rules(PRICING_SOURCE, PRICING_DRL);
    project.process_resources();
    project
}

#[test]
fn generates_one_source_one_manifest_entry_and_retires_the_original() {
    let project = project();

    let (outcome, descriptor) = project.generate().unwrap();
    let report = outcome.report().expect("generation should run");

    assert_eq!(report.generated.len(), 1);
    assert_eq!(report.generated[0].path, project.path(RULES_CLASS));
    assert_file(&project, RULES_CLASS);

    let rules = project.read(RULES_CLASS);
    assert!(rules.contains("package org.acme.pricing;"));
    assert!(rules.contains("ADULT_DISCOUNT"));

    assert_eq!(project.read(MANIFEST), "org.acme.pricing.Rules\n");

    assert_no_file(&project, &format!("target/classes/{}", PRICING_SOURCE));
    let retirement = report.retirement.as_ref().unwrap();
    assert!(retirement.residual.is_empty());
    assert_eq!(retirement.deleted.len(), 1);

    // The original under src/ is never touched
    assert_file(&project, &format!("src/main/resources/{}", PRICING_SOURCE));
    assert!(descriptor
        .compile_source_roots()
        .contains(&project.path(GENERATED_ROOT)));
}

#[test]
fn yes_policy_keeps_the_copied_rule_source() {
    let project = project();
    let mut config = project.config();
    config.generation.policy = GenerationPolicy::Yes;

    let (outcome, _) = project
        .generate_with(&config, &ContextSlot::new(), false)
        .unwrap();

    assert!(outcome.report().unwrap().retirement.is_none());
    assert_file(&project, RULES_CLASS);
    assert_file(&project, &format!("target/classes/{}", PRICING_SOURCE));
}

#[test]
fn skip_model_policy_writes_nothing() {
    let project = project();
    let mut config = project.config();
    config.generation.policy = GenerationPolicy::SkipModel;

    let (outcome, _) = project
        .generate_with(&config, &ContextSlot::new(), false)
        .unwrap();

    assert!(matches!(outcome, GenerateOutcome::Skipped { .. }));
    assert_no_file(&project, GENERATED_ROOT);
    assert_no_file(&project, MANIFEST);
}

#[test]
fn rerunning_is_byte_identical() {
    let project = project();
    let mut config: Config = project.config();
    config.generation.policy = GenerationPolicy::Yes;
    let slot = ContextSlot::new();

    project.generate_with(&config, &slot, false).unwrap();
    let first_rules = project.read(RULES_CLASS);
    let first_manifest = project.read(MANIFEST);

    let (outcome, _) = project.generate_with(&config, &slot, false).unwrap();
    assert_eq!(project.read(RULES_CLASS), first_rules);
    assert_eq!(project.read(MANIFEST), first_manifest);
    assert_eq!(outcome.report().unwrap().generated.len(), 1);
}

#[test]
fn two_sources_in_one_package_share_one_model_class() {
    let project = TestProject::new(CONFIG)
        .with_rules(PRICING_SOURCE, PRICING_DRL)
        .with_rules(SHIPPING_SOURCE, SHIPPING_DRL);
    project.process_resources();

    let (outcome, _) = project.generate().unwrap();
    let report = outcome.report().unwrap();

    assert_eq!(report.generated.len(), 1);
    let rules = project.read(RULES_CLASS);
    assert!(rules.contains("ADULT_DISCOUNT"));
    assert!(rules.contains("FREE_SHIPPING"));
    assert_eq!(report.deleted_count(), 2);
}

#[test]
fn per_rule_strategy_writes_a_class_per_rule() {
    let project = TestProject::new(CONFIG)
        .with_rules(PRICING_SOURCE, PRICING_DRL)
        .with_rules(SHIPPING_SOURCE, SHIPPING_DRL);
    project.process_resources();
    let mut config = project.config();
    config.generation.strategy = StrategyKind::PerRule;

    let (outcome, _) = project
        .generate_with(&config, &ContextSlot::new(), false)
        .unwrap();
    let report = outcome.report().unwrap();

    assert_eq!(report.strategy, "per-rule");
    assert_eq!(report.generated.len(), 3);
    let package = format!("{}/org/acme/pricing", GENERATED_ROOT);
    assert_file(&project, &format!("{}/AdultDiscount.java", package));
    assert_file(&project, &format!("{}/FreeShipping.java", package));
    assert_file(&project, &format!("{}/Rules.java", package));
    assert_eq!(
        project.read(MANIFEST),
        "org.acme.pricing.AdultDiscount\norg.acme.pricing.FreeShipping\norg.acme.pricing.Rules\n"
    );
}

#[test]
fn dry_run_reports_without_touching_disk() {
    let project = project();
    let (outcome, _) = project
        .generate_with(&project.config(), &ContextSlot::new(), true)
        .unwrap();
    let report = outcome.report().unwrap();

    assert!(report.dry_run);
    assert_eq!(report.generated[0].path, project.path(RULES_CLASS));
    assert_eq!(report.deleted_count(), 1);
    assert_no_file(&project, GENERATED_ROOT);
    assert_no_file(&project, MANIFEST);
    assert_file(&project, &format!("target/classes/{}", PRICING_SOURCE));
}

#[test]
fn test_resources_are_not_compiled() {
    let project = project();
    project.write(
        "src/test/resources/org/acme/fixture.drl",
        "package org.acme.testing;\nrule \"Only in tests\"\nthen\nend\n",
    );

    let (outcome, _) = project.generate().unwrap();
    let report = outcome.report().unwrap();
    assert_eq!(report.generated.len(), 1);
    assert_no_file(
        &project,
        &format!("{}/org/acme/testing/Rules.java", GENERATED_ROOT),
    );
}
