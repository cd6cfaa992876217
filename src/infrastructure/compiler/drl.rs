//! Built-in rule compiler
//!
//! Reads every rule source below the module's resource directories, groups the
//! rules by package and hands the packages to the write strategy in a single
//! call. Rule sources are kept in the output tree at their resource-relative
//! path, next to whatever the strategy generates.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::entities::{PackageModel, DEFAULT_PACKAGE};
use crate::domain::ports::{BuildOutput, CompileRequest, FileSystem, RuleCompiler, WriteStrategy};
use crate::domain::value_objects::{ClasspathContext, Diagnostic, PortablePath};
use crate::infrastructure::fs::LocalFs;

use super::parser::parse_rule_source;

#[derive(Debug, Clone)]
pub struct DrlCompiler {
    rule_suffix: String,
    resource_dirs: Vec<PathBuf>,
}

impl DrlCompiler {
    /// `resource_dirs` are resolved against the module root of each request.
    pub fn new(rule_suffix: impl Into<String>, resource_dirs: Vec<PathBuf>) -> Self {
        Self {
            rule_suffix: rule_suffix.into(),
            resource_dirs,
        }
    }

    fn check_import(&self, classpath: &ClasspathContext, import: &str) -> bool {
        // Archives are not inspected, so only a directory-only classpath can
        // prove an import missing.
        if import.ends_with(".*") || classpath.has_archives() {
            return true;
        }
        classpath
            .locate(&format!("{}.class", import.replace('.', "/")))
            .is_some()
    }
}

impl Default for DrlCompiler {
    fn default() -> Self {
        Self::new(
            "drl",
            vec![
                PathBuf::from("src/main/resources"),
                PathBuf::from("src/test/resources"),
            ],
        )
    }
}

impl RuleCompiler for DrlCompiler {
    fn compile(&self, request: &CompileRequest<'_>, strategy: &dyn WriteStrategy) -> BuildOutput {
        let mut output = BuildOutput::new(request.module.clone());
        let mut packages: BTreeMap<String, PackageModel> = BTreeMap::new();
        let fs = LocalFs::new();
        let mut source_count = 0usize;

        for dir in &self.resource_dirs {
            let root = request.module_root.join(dir);
            let files = match fs.walk_files(&root) {
                Ok(files) => files,
                Err(e) => {
                    output.diagnostics.push(Diagnostic::error(e.to_string()));
                    continue;
                }
            };

            for file in files {
                if file.extension().and_then(|e| e.to_str()) != Some(self.rule_suffix.as_str()) {
                    continue;
                }
                let module_relative = file.strip_prefix(request.module_root).unwrap_or(&file);
                if (request.exclude)(&module_relative.to_string_lossy()) {
                    tracing::debug!(path = %file.display(), "excluded rule source");
                    continue;
                }

                let relative = match file
                    .strip_prefix(&root)
                    .map_err(|e| e.to_string())
                    .and_then(|rel| PortablePath::from_relative(rel).map_err(|e| e.to_string()))
                {
                    Ok(rel) => rel,
                    Err(message) => {
                        output.diagnostics.push(Diagnostic::error(message));
                        continue;
                    }
                };

                let bytes = match fs.read(&file) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        output
                            .diagnostics
                            .push(Diagnostic::error(e.to_string()).in_file(relative));
                        continue;
                    }
                };
                let text = match std::str::from_utf8(&bytes) {
                    Ok(text) => text,
                    Err(_) => {
                        output.diagnostics.push(
                            Diagnostic::error("rule source is not valid UTF-8").in_file(relative),
                        );
                        continue;
                    }
                };

                source_count += 1;
                let (parsed, diagnostics) = parse_rule_source(&relative, text);
                output.diagnostics.extend(diagnostics);

                let package_name = parsed
                    .package
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PACKAGE.to_string());
                let package = packages
                    .entry(package_name.clone())
                    .or_insert_with(|| PackageModel::new(package_name.clone()));

                for (import, line) in parsed.imports {
                    if !self.check_import(request.classpath, &import) {
                        output.diagnostics.push(
                            Diagnostic::warning(format!(
                                "import '{}' is not provided by any classpath directory",
                                import
                            ))
                            .at(relative.clone(), line),
                        );
                    }
                    package.add_import(import);
                }
                for rule in parsed.rules {
                    if package.has_rule(&rule.name) {
                        output.diagnostics.push(
                            Diagnostic::error(format!(
                                "duplicate rule '{}' in package '{}'",
                                rule.name, package_name
                            ))
                            .at(rule.source.clone(), rule.line),
                        );
                    } else {
                        package.add_rule(rule);
                    }
                }

                if output.tree.contains(&relative) {
                    output.diagnostics.push(
                        Diagnostic::warning("rule source shadows one from another resource directory")
                            .in_file(relative.clone()),
                    );
                }
                if let Err(e) = output.tree.write(relative, bytes) {
                    output.diagnostics.push(Diagnostic::error(e.to_string()));
                }
            }
        }

        if source_count == 0 {
            output.diagnostics.push(Diagnostic::warning(format!(
                "no .{} sources found under {}",
                self.rule_suffix,
                request.module_root.display()
            )));
        }
        if output.has_errors() {
            return output;
        }

        let packages: Vec<PackageModel> = packages.into_values().collect();
        match strategy.write_model(&mut output.tree, &packages, request.module) {
            Ok(files) => tracing::debug!(
                strategy = strategy.name(),
                models = files.model_files.len(),
                "model written"
            ),
            Err(e) => output.diagnostics.push(Diagnostic::error(e.to_string())),
        }
        output
    }
}
