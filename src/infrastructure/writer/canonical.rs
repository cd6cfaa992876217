//! Canonical model writer: one `Rules` class per package

use crate::domain::entities::{PackageModel, VirtualFileTree};
use crate::domain::ports::{ModelFiles, WriteStrategy};
use crate::domain::value_objects::ModuleIdentity;
use crate::error::RulegenResult;

use super::java::{attribute_array, constant_name, preamble, quoted, string_array, unique};
use super::{write_packages, RenderedSource};

pub const RULES_CLASS: &str = "Rules";

#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalModelWriter;

impl WriteStrategy for CanonicalModelWriter {
    fn name(&self) -> &'static str {
        "canonical"
    }

    fn write_model(
        &self,
        target: &mut VirtualFileTree,
        packages: &[PackageModel],
        module: &ModuleIdentity,
    ) -> RulegenResult<ModelFiles> {
        write_packages(self.name(), target, packages, module, |package, module| {
            vec![RenderedSource {
                path: format!("{}.java", RULES_CLASS),
                content: render_rules_class(package, module),
                model_class: Some(format!("{}.{}", package.name(), RULES_CLASS)),
            }]
        })
    }
}

fn render_rules_class(package: &PackageModel, module: &ModuleIdentity) -> String {
    let constants = unique(
        package.rules().iter().map(|r| constant_name(&r.name)),
        &[],
    );

    let mut out = preamble(package, module);
    out.push_str(&format!("\npublic final class {} {{\n\n", RULES_CLASS));
    out.push_str(
        "    public record RuleDef(String name, String source, int line, \
         String[][] attributes, String[] when, String[] then) {\n    }\n\n",
    );
    out.push_str(&format!("    private {}() {{\n    }}\n", RULES_CLASS));

    for (rule, constant) in package.rules().iter().zip(&constants) {
        out.push_str(&format!(
            "\n    public static final RuleDef {} = new RuleDef(\n            {},\n            {},\n            {},\n            {},\n            {},\n            {});\n",
            constant,
            quoted(&rule.name),
            quoted(rule.source.as_str()),
            rule.line,
            attribute_array(&rule.attributes),
            string_array(&rule.conditions),
            string_array(&rule.consequence),
        ));
    }

    out.push_str(&format!(
        "\n    public static java.util.List<RuleDef> rules() {{\n        return java.util.List.of({});\n    }}\n}}\n",
        constants.join(", ")
    ));
    out
}
