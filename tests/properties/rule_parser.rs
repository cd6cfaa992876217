//! Property tests for the rule source parser.

use proptest::prelude::*;

use rulegen::infrastructure::compiler::parse_rule_source;
use rulegen::PortablePath;

fn source() -> PortablePath {
    PortablePath::parse("org/acme/fuzz.drl").unwrap()
}

fn rule_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The parser never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(text in "(?s).{0,512}") {
        let _ = parse_rule_source(&source(), &text);
    }

    /// PROPERTY: Well-formed rules parse back with their names and header lines.
    #[test]
    fn property_well_formed_rules_parse_cleanly(
        names in proptest::collection::vec(rule_name(), 1..=6),
    ) {
        let mut text = String::from("package org.acme.fuzz;\n");
        let mut lines = Vec::new();
        for name in &names {
            text.push('\n');
            lines.push(text.lines().count() + 1);
            text.push_str(&format!("rule \"{}\"\nwhen\n    Fact()\nthen\n    act();\nend\n", name));
        }

        let (parsed, diagnostics) = parse_rule_source(&source(), &text);

        prop_assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        let parsed_names: Vec<&str> = parsed.rules.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed_names, expected);
        let parsed_lines: Vec<usize> = parsed.rules.iter().map(|r| r.line).collect();
        prop_assert_eq!(parsed_lines, lines);
    }

    /// PROPERTY: Every diagnostic points into the parsed source.
    #[test]
    fn property_diagnostics_carry_the_source(text in "(?s).{0,256}") {
        let (_, diagnostics) = parse_rule_source(&source(), &text);
        for diagnostic in diagnostics {
            prop_assert_eq!(diagnostic.file, Some(source()));
        }
    }
}
