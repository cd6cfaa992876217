//! Per-rule model writer: one class per rule plus a package `Rules` index

use crate::domain::entities::{PackageModel, RuleModel, VirtualFileTree};
use crate::domain::ports::{ModelFiles, WriteStrategy};
use crate::domain::value_objects::ModuleIdentity;
use crate::error::RulegenResult;

use super::canonical::RULES_CLASS;
use super::java::{attribute_array, class_name, preamble, quoted, string_array, unique};
use super::{write_packages, RenderedSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct PerRuleModelWriter;

impl WriteStrategy for PerRuleModelWriter {
    fn name(&self) -> &'static str {
        "per-rule"
    }

    fn write_model(
        &self,
        target: &mut VirtualFileTree,
        packages: &[PackageModel],
        module: &ModuleIdentity,
    ) -> RulegenResult<ModelFiles> {
        write_packages(self.name(), target, packages, module, render_package)
    }
}

fn render_package(package: &PackageModel, module: &ModuleIdentity) -> Vec<RenderedSource> {
    let classes = unique(
        package.rules().iter().map(|r| class_name(&r.name)),
        &[RULES_CLASS],
    );

    let mut sources: Vec<RenderedSource> = package
        .rules()
        .iter()
        .zip(&classes)
        .map(|(rule, class)| RenderedSource {
            path: format!("{}.java", class),
            content: render_rule_class(package, module, rule, class),
            model_class: Some(format!("{}.{}", package.name(), class)),
        })
        .collect();

    let refs: Vec<String> = classes.iter().map(|c| format!("{}.class", c)).collect();
    let mut index = preamble(package, module);
    index.push_str(&format!(
        "\npublic final class {name} {{\n\n    private {name}() {{\n    }}\n\n    public static java.util.List<Class<?>> rules() {{\n        return java.util.List.of({refs});\n    }}\n}}\n",
        name = RULES_CLASS,
        refs = refs.join(", ")
    ));
    sources.push(RenderedSource {
        path: format!("{}.java", RULES_CLASS),
        content: index,
        model_class: Some(format!("{}.{}", package.name(), RULES_CLASS)),
    });
    sources
}

fn render_rule_class(
    package: &PackageModel,
    module: &ModuleIdentity,
    rule: &RuleModel,
    class: &str,
) -> String {
    let mut out = preamble(package, module);
    out.push_str(&format!(
        "\npublic final class {class} {{\n\n    public static final String NAME = {name};\n    public static final String SOURCE = {source};\n    public static final int LINE = {line};\n    public static final String[][] ATTRIBUTES = {attrs};\n    public static final String[] WHEN = {when};\n    public static final String[] THEN = {then};\n\n    private {class}() {{\n    }}\n}}\n",
        class = class,
        name = quoted(&rule.name),
        source = quoted(rule.source.as_str()),
        line = rule.line,
        attrs = attribute_array(&rule.attributes),
        when = string_array(&rule.conditions),
        then = string_array(&rule.consequence),
    ));
    out
}
