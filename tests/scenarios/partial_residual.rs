//! One of two expected rule sources disappears before retirement.

use crate::common::*;

#[test]
fn missing_source_is_reported_as_residual_and_run_succeeds() {
    let project = TestProject::new(CONFIG)
        .with_rules(PRICING_SOURCE, PRICING_DRL)
        .with_rules(SHIPPING_SOURCE, SHIPPING_DRL);
    project.process_resources();
    // Removed by another process after resources were copied
    std::fs::remove_file(project.path(&format!("target/classes/{}", SHIPPING_SOURCE))).unwrap();

    let (outcome, _) = project.generate().unwrap();
    let retirement = outcome.report().unwrap().retirement.clone().unwrap();

    let residual: Vec<&str> = retirement.residual.iter().map(|p| p.as_str()).collect();
    assert_eq!(residual, vec![SHIPPING_SOURCE]);
    assert_eq!(retirement.deleted, vec![project.path(&format!("target/classes/{}", PRICING_SOURCE))]);
    assert_eq!(retirement.search_root, project.path("target/classes"));
    assert_file(&project, RULES_CLASS);
}

#[test]
fn residual_is_a_warning_on_the_cli() {
    let project = TestProject::new(CONFIG)
        .with_rules(PRICING_SOURCE, PRICING_DRL)
        .with_rules(SHIPPING_SOURCE, SHIPPING_DRL);
    project.process_resources();
    std::fs::remove_file(project.path(&format!("target/classes/{}", SHIPPING_SOURCE))).unwrap();

    let result = project.run(&["generate"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("Files not deleted: org/acme/shipping.drl"));
    assert!(result.stdout.contains("Not deleted (1)"));
}
