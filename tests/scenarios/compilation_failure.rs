//! A rule source the compiler rejects.

use rulegen::RulegenError;

use crate::common::*;

fn broken_project() -> TestProject {
    let project = TestProject::new(CONFIG)
        .with_rules(PRICING_SOURCE, PRICING_DRL)
        .with_rules("org/acme/broken.drl", BROKEN_DRL);
    project.process_resources();
    project
}

#[test]
fn aborts_with_diagnostics_and_no_side_effects() {
    let project = broken_project();
    let before = list_all_files(project.root());

    let err = project.generate().unwrap_err();

    match err {
        RulegenError::CompilationFailed { diagnostics } => {
            assert_eq!(diagnostics.len(), 1);
            let rendered = diagnostics[0].to_string();
            assert!(rendered.contains("org/acme/broken.drl:3"), "{rendered}");
            assert!(rendered.contains("unterminated rule 'Broken'"), "{rendered}");
        }
        other => panic!("expected CompilationFailed, got {other:?}"),
    }

    assert_no_file(&project, GENERATED_ROOT);
    assert_no_file(&project, MANIFEST);
    assert_file(&project, &format!("target/classes/{}", PRICING_SOURCE));
    assert_file(&project, "target/classes/org/acme/broken.drl");

    assert_eq!(list_all_files(project.root()), before);
    assert_no_file(&project, "target/.rulegen.lock");
}

#[test]
fn cli_fails_and_prints_every_diagnostic() {
    let project = broken_project();

    let result = project.run(&["generate"]);

    assert!(!result.success);
    assert!(result.stderr.contains("model generation failed for org.acme:pricing:1.0.0"));
    assert!(result.stderr.contains("unterminated rule 'Broken'"));
}
