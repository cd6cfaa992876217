//! Package models handed from the rule compiler to a write strategy

use std::collections::BTreeSet;

use crate::domain::value_objects::PortablePath;

/// Package name used for rules that declare none.
pub const DEFAULT_PACKAGE: &str = "defaultpkg";

/// One compiled rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleModel {
    pub name: String,
    /// `(key, value)` attributes such as `salience 10`
    pub attributes: Vec<(String, String)>,
    /// Condition patterns from the `when` block, one per line
    pub conditions: Vec<String>,
    /// Statements from the `then` block, one per line
    pub consequence: Vec<String>,
    /// Rule source the rule was declared in
    pub source: PortablePath,
    /// 1-based line of the `rule` keyword
    pub line: usize,
}

/// All rules of one package across every rule source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageModel {
    name: String,
    imports: BTreeSet<String>,
    rules: Vec<RuleModel>,
}

impl PackageModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: BTreeSet::new(),
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package folder, e.g. `org/acme` for `org.acme`.
    pub fn folder(&self) -> String {
        self.name.replace('.', "/")
    }

    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    pub fn rules(&self) -> &[RuleModel] {
        &self.rules
    }

    pub fn add_import(&mut self, import: impl Into<String>) {
        self.imports.insert(import.into());
    }

    pub fn add_rule(&mut self, rule: RuleModel) {
        self.rules.push(rule);
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name == name)
    }

    /// Rule sources contributing to this package, in order.
    pub fn sources(&self) -> BTreeSet<&PortablePath> {
        self.rules.iter().map(|r| &r.source).collect()
    }
}
