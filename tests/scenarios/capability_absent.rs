//! Generation requested, but the capability marker is not a dependency.

use rulegen::application::GenerateOutcome;

use crate::common::*;

#[test]
fn warns_and_succeeds_without_writing_anything() {
    let project = TestProject::new(CONFIG_WITHOUT_MARKER).with_rules(PRICING_SOURCE, PRICING_DRL);
    project.process_resources();

    let (outcome, descriptor) = project.generate().unwrap();

    match outcome {
        GenerateOutcome::CapabilityMissing { marker } => {
            assert_eq!(marker, "rules-model-compiler")
        }
        other => panic!("expected CapabilityMissing, got {other:?}"),
    }
    assert_no_file(&project, GENERATED_ROOT);
    assert_no_file(&project, MANIFEST);
    assert_file(&project, &format!("target/classes/{}", PRICING_SOURCE));
    assert!(!descriptor
        .compile_source_roots()
        .contains(&project.path(GENERATED_ROOT)));
}

#[test]
fn cli_exits_zero_and_explains() {
    let project = TestProject::new(CONFIG_WITHOUT_MARKER).with_rules(PRICING_SOURCE, PRICING_DRL);

    let result = project.run(&["generate"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("no dependency named 'rules-model-compiler'"));
    assert!(result.stderr.contains("rules-model-compiler"));
}
