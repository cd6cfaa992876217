//! Generate Model Use Case
//!
//! `Idle -> ContextEntered -> Compiled -> Classified -> Materialized ->
//! [Retired] -> ContextExited`. The classpath scope is a guard, so the exit
//! transition happens whether the enclosed stages succeed or not.

use std::path::{Path, PathBuf};

use crate::application::materialize::{plan, Materializer, WrittenFile};
use crate::application::orchestrator::GenerationOrchestrator;
use crate::application::retire::SourceRetirement;
use crate::domain::entities::{ProjectDescriptor, VirtualFile};
use crate::domain::ports::{FileSystem, RuleCompiler, WriteStrategy};
use crate::domain::services::{ArtifactClassifier, TestSourceFilter};
use crate::domain::value_objects::ClasspathContext;
use crate::error::{RulegenError, RulegenResult};
use crate::infrastructure::classpath::{resolve_classpath, ContextSlot};
use crate::infrastructure::fs::RunLock;

use super::options::GenerateOptions;
use super::result::{GenerateOutcome, GenerateReport, PipelineStage};

/// Generated sources live here below the build directory.
pub fn generated_sources_root(build_dir: &Path) -> PathBuf {
    build_dir
        .join("generated-sources")
        .join("model-compiler")
        .join("main")
}

/// Generate model use case - compiles rule sources into model sources
pub struct GenerateModelUseCase<'s, C, FS>
where
    C: RuleCompiler,
    FS: FileSystem,
{
    compiler: C,
    fs: FS,
    strategy: Box<dyn WriteStrategy>,
    slot: &'s ContextSlot,
}

impl<'s, C, FS> GenerateModelUseCase<'s, C, FS>
where
    C: RuleCompiler,
    FS: FileSystem,
{
    pub fn new(compiler: C, fs: FS, strategy: Box<dyn WriteStrategy>, slot: &'s ContextSlot) -> Self {
        Self {
            compiler,
            fs,
            strategy,
            slot,
        }
    }

    /// Run the pipeline for `project`.
    ///
    /// On success the generated-sources root is registered on `project`
    /// (except in a dry run).
    pub fn execute(
        &self,
        project: &mut ProjectDescriptor,
        options: &GenerateOptions,
    ) -> RulegenResult<GenerateOutcome> {
        advance(PipelineStage::Idle);

        if !options.policy.is_enabled() {
            tracing::info!(policy = %options.policy, "model generation disabled");
            return Ok(GenerateOutcome::Skipped {
                policy: options.policy,
            });
        }

        if !project.has_dependency_named(&options.capability_marker) {
            tracing::warn!(
                "Model generation requested with policy {} but {} does not depend on '{}'; \
                 declare it under [[dependencies]] to enable generation",
                options.policy,
                project.module(),
                options.capability_marker
            );
            return Ok(GenerateOutcome::CapabilityMissing {
                marker: options.capability_marker.clone(),
            });
        }

        let classpath = resolve_classpath(project)?;
        let scope = self.slot.enter(classpath, &options.properties)?;
        advance(PipelineStage::ContextEntered);

        let result = self.run_scoped(project, options, scope.context());

        drop(scope);
        advance(PipelineStage::ContextExited);

        let report = result?;
        tracing::info!(
            "Model generation completed for {}: {} generated files, {} rule sources retired",
            report.module,
            report.generated_count(),
            report.deleted_count()
        );
        Ok(GenerateOutcome::Generated(report))
    }

    fn run_scoped(
        &self,
        project: &mut ProjectDescriptor,
        options: &GenerateOptions,
        classpath: &ClasspathContext,
    ) -> RulegenResult<GenerateReport> {
        let filter = TestSourceFilter::new(&test_source_folder(project));
        let exclude = |path: &str| filter.excludes(path);

        let generated = GenerationOrchestrator::new(&self.compiler).generate(
            project.root(),
            project.module(),
            &exclude,
            self.strategy.as_ref(),
            classpath,
        )?;
        advance(PipelineStage::Compiled);

        let classifier = ArtifactClassifier::new(&options.generated_suffix, &options.rule_suffix);
        let artifacts = classifier.classify(&generated.tree, &generated.module)?;
        advance(PipelineStage::Classified);
        tracing::info!("Found {} generated files", artifacts.generated_sources.len());

        // Held from the first write until retirement is done
        let _lock = if options.dry_run {
            None
        } else {
            Some(RunLock::acquire(project.build_dir())?)
        };

        let source_root = generated_sources_root(project.build_dir());
        let sources: Vec<&VirtualFile> = artifacts
            .generated_sources
            .iter()
            .filter_map(|path| generated.tree.get(path))
            .collect();
        let written = self.write_files(sources, &source_root, options.dry_run)?;
        if !options.dry_run {
            project.add_compile_source_root(&source_root);
        }

        let manifest_file = generated.tree.get(&artifacts.manifest).ok_or_else(|| {
            RulegenError::ManifestMissing {
                path: artifacts.manifest.to_string(),
            }
        })?;
        let manifest = self
            .write_files(vec![manifest_file], project.output_dir(), options.dry_run)?
            .pop()
            .ok_or_else(|| RulegenError::ManifestMissing {
                path: artifacts.manifest.to_string(),
            })?;
        advance(PipelineStage::Materialized);

        let retirement = if options.policy.retires_sources() {
            let retirement =
                SourceRetirement::new(&self.fs, project.output_dir(), &options.rule_suffix)?;
            let report = if options.dry_run {
                retirement.plan(&artifacts.rule_sources)?
            } else {
                retirement.retire(&artifacts.rule_sources)?
            };
            advance(PipelineStage::Retired);
            Some(report)
        } else {
            None
        };

        Ok(GenerateReport {
            module: generated.module,
            strategy: self.strategy.name().to_string(),
            dry_run: options.dry_run,
            generated: written,
            manifest,
            source_root,
            retirement,
            warnings: generated.warnings,
        })
    }

    fn write_files(
        &self,
        files: Vec<&VirtualFile>,
        root: &Path,
        dry_run: bool,
    ) -> RulegenResult<Vec<WrittenFile>> {
        if dry_run {
            Ok(plan(files, root))
        } else {
            Materializer::new(&self.fs).materialize(files, root)
        }
    }
}

fn advance(stage: PipelineStage) {
    tracing::debug!(%stage, "pipeline stage");
}

/// Test-source folder relative to the project root, as a path string.
fn test_source_folder(project: &ProjectDescriptor) -> String {
    let dir = project.test_source_dir();
    let relative = dir.strip_prefix(project.root()).unwrap_or(dir);
    relative.to_string_lossy().into_owned()
}
