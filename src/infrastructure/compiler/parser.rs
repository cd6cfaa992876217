//! Rule source parser
//!
//! Line-oriented reader for the rule language:
//!
//! ```text
//! package org.acme.pricing;
//! import org.acme.facts.Person;
//!
//! rule "Adult discount"
//!     salience 10
//! when
//!     $p : Person(age >= 18)
//! then
//!     $p.grantDiscount(5);
//! end
//! ```
//!
//! `//` and `#` start comment lines. Conditions and consequences are kept as
//! opaque text; only the block structure is checked.

use crate::domain::entities::RuleModel;
use crate::domain::value_objects::{Diagnostic, PortablePath};

/// Declarations read from one rule source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRuleFile {
    pub package: Option<String>,
    /// `(qualified name, line)`
    pub imports: Vec<(String, usize)>,
    pub rules: Vec<RuleModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Header,
    When,
    Then,
}

struct OpenRule {
    rule: RuleModel,
    block: Block,
}

/// Parse `text`, collecting every problem instead of stopping at the first.
pub fn parse_rule_source(source: &PortablePath, text: &str) -> (ParsedRuleFile, Vec<Diagnostic>) {
    let mut parsed = ParsedRuleFile::default();
    let mut diagnostics = Vec::new();
    let mut open: Option<OpenRule> = None;

    let error = |message: String, line: usize| Diagnostic::error(message).at(source.clone(), line);

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
            continue;
        }
        let (keyword, rest) = split_keyword(line);

        if let Some(current) = open.as_mut() {
            match (current.block, keyword) {
                (_, "rule") if current.block != Block::Then || rest.starts_with('"') => {
                    diagnostics.push(error(
                        format!("unterminated rule '{}' (missing 'end')", current.rule.name),
                        current.rule.line,
                    ));
                    open = None;
                    // Fall through to the top-level handling below.
                }
                (Block::Header, "when") => {
                    current.block = Block::When;
                    push_inline(&mut current.rule.conditions, rest);
                    continue;
                }
                (Block::Header | Block::When, "then") => {
                    current.block = Block::Then;
                    push_inline(&mut current.rule.consequence, rest);
                    continue;
                }
                (Block::Header | Block::When, "end") => {
                    diagnostics.push(error(
                        format!("rule '{}' has no 'then' block", current.rule.name),
                        line_no,
                    ));
                    open = None;
                    continue;
                }
                (Block::Then, "end") if rest.is_empty() || rest == ";" => {
                    if let Some(done) = open.take() {
                        parsed.rules.push(done.rule);
                    }
                    continue;
                }
                (Block::Header, _) => {
                    match parse_attribute(line) {
                        Some(attr) => current.rule.attributes.push(attr),
                        None => diagnostics.push(error(
                            format!("invalid rule attribute '{}'", line),
                            line_no,
                        )),
                    }
                    continue;
                }
                (Block::When, _) => {
                    current.rule.conditions.push(line.to_string());
                    continue;
                }
                (Block::Then, _) => {
                    current.rule.consequence.push(line.to_string());
                    continue;
                }
            }
        }

        match keyword {
            "package" => {
                let name = strip_semicolon(rest);
                if parsed.package.is_some() {
                    diagnostics.push(error("duplicate package declaration".to_string(), line_no));
                } else if !parsed.rules.is_empty() || !parsed.imports.is_empty() {
                    diagnostics.push(error(
                        "package declaration must come first".to_string(),
                        line_no,
                    ));
                } else if !is_qualified_name(name, false) {
                    diagnostics.push(error(format!("invalid package name '{}'", name), line_no));
                } else {
                    parsed.package = Some(name.to_string());
                }
            }
            "import" => {
                let name = strip_semicolon(rest);
                if is_qualified_name(name, true) {
                    parsed.imports.push((name.to_string(), line_no));
                } else {
                    diagnostics.push(error(format!("invalid import '{}'", name), line_no));
                }
            }
            "rule" => match parse_rule_name(rest) {
                Some(name) => {
                    open = Some(OpenRule {
                        rule: RuleModel {
                            name,
                            attributes: Vec::new(),
                            conditions: Vec::new(),
                            consequence: Vec::new(),
                            source: source.clone(),
                            line: line_no,
                        },
                        block: Block::Header,
                    });
                }
                None => diagnostics.push(error(format!("invalid rule name '{}'", rest), line_no)),
            },
            other => diagnostics.push(error(format!("unexpected '{}'", other), line_no)),
        }
    }

    if let Some(current) = open {
        diagnostics.push(error(
            format!("unterminated rule '{}' (missing 'end')", current.rule.name),
            current.rule.line,
        ));
    }

    (parsed, diagnostics)
}

fn split_keyword(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], line[idx..].trim()),
        None => (line, ""),
    }
}

fn push_inline(target: &mut Vec<String>, rest: &str) {
    if !rest.is_empty() {
        target.push(rest.to_string());
    }
}

fn strip_semicolon(s: &str) -> &str {
    s.trim().trim_end_matches(';').trim_end()
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn is_qualified_name(s: &str, allow_wildcard: bool) -> bool {
    let body = match s.strip_suffix(".*") {
        Some(body) if allow_wildcard => body,
        _ => s,
    };
    !body.is_empty() && body.split('.').all(is_identifier)
}

fn parse_rule_name(rest: &str) -> Option<String> {
    if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        let name = &quoted[..end];
        let trailing = quoted[end + 1..].trim();
        if name.trim().is_empty() || !trailing.is_empty() {
            return None;
        }
        return Some(name.to_string());
    }
    is_identifier(rest).then(|| rest.to_string())
}

fn parse_attribute(line: &str) -> Option<(String, String)> {
    let (key, value) = split_keyword(line);
    let valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-' || c == '_');
    if !valid_key {
        return None;
    }
    let value = if value.is_empty() { "true" } else { value };
    Some((key.to_string(), value.trim_matches('"').to_string()))
}
