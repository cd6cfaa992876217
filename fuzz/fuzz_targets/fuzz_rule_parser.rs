#![no_main]

use libfuzzer_sys::fuzz_target;

use rulegen::infrastructure::compiler::parse_rule_source;
use rulegen::PortablePath;

fuzz_target!(|data: &[u8]| {
    if let (Ok(content), Ok(source)) = (std::str::from_utf8(data), PortablePath::parse("fuzz.drl")) {
        let (parsed, diagnostics) = parse_rule_source(&source, content);

        // Every rule and diagnostic line must point into the input
        let line_count = content.lines().count();
        for rule in &parsed.rules {
            assert!(rule.line >= 1 && rule.line <= line_count);
        }
        for line in diagnostics.iter().filter_map(|d| d.line) {
            assert!(line >= 1 && line <= line_count);
        }
    }
});
