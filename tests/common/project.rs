//! Isolated project layout for end-to-end tests.
//!
//! `TestProject` owns a temp directory laid out like a module: a config file,
//! rule sources under `src/main/resources`, and a build tree under `target`.
//! Resource processing is simulated by `process_resources`, which copies rule
//! sources into `target/classes` the way the enclosing build would.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use rulegen::application::{GenerateModelUseCase, GenerateOutcome};
use rulegen::config::{Config, CONFIG_FILE_NAME};
use rulegen::infrastructure::{strategy_for, ContextSlot, DrlCompiler, LocalFs};
use rulegen::{ProjectDescriptor, RulegenResult};

/// Result of running the rulegen CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestProject {
    _dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new(config: &str) -> Self {
        Self::create(config, None)
    }

    /// Module rooted at `subdir` inside the temp directory.
    pub fn nested(config: &str, subdir: &str) -> Self {
        Self::create(config, Some(subdir))
    }

    fn create(config: &str, subdir: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = match subdir {
            Some(subdir) => dir.path().join(subdir),
            None => dir.path().to_path_buf(),
        };
        std::fs::create_dir_all(&root).unwrap();
        let project = Self { _dir: dir, root };
        project.write(CONFIG_FILE_NAME, config);
        project
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Add a rule source below `src/main/resources`.
    pub fn with_rules(self, relative: &str, content: &str) -> Self {
        self.write(&format!("src/main/resources/{}", relative), content);
        self
    }

    /// Copy every main resource into `target/classes`.
    pub fn process_resources(&self) {
        let resources = self.path("src/main/resources");
        for file in super::list_all_files(&resources) {
            let file = PathBuf::from(file);
            let relative = file.strip_prefix(&resources).unwrap();
            let target = self.path("target/classes").join(relative);
            std::fs::create_dir_all(target.parent().unwrap()).unwrap();
            std::fs::copy(&file, target).unwrap();
        }
    }

    pub fn config(&self) -> Config {
        Config::load(&self.path(CONFIG_FILE_NAME)).unwrap()
    }

    pub fn descriptor(&self) -> ProjectDescriptor {
        self.config().into_project(self.root()).unwrap()
    }

    /// Run the pipeline in-process against `slot`.
    pub fn generate_with(
        &self,
        config: &Config,
        slot: &ContextSlot,
        dry_run: bool,
    ) -> RulegenResult<(GenerateOutcome, ProjectDescriptor)> {
        let mut project = config.into_project(self.root())?;
        let use_case = GenerateModelUseCase::new(
            DrlCompiler::new(
                config.generation.rule_suffix.as_str(),
                project.resource_dirs().to_vec(),
            ),
            LocalFs::new(),
            strategy_for(config.generation.strategy),
            slot,
        );
        let outcome = use_case.execute(&mut project, &config.generate_options(dry_run))?;
        Ok((outcome, project))
    }

    pub fn generate(&self) -> RulegenResult<(GenerateOutcome, ProjectDescriptor)> {
        let slot = ContextSlot::new();
        self.generate_with(&self.config(), &slot, false)
    }

    /// Run the rulegen binary from the project root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        let mut command = Command::new(env!("CARGO_BIN_EXE_rulegen"));
        command
            .args(args)
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .env_remove("RULEGEN_GENERATE_MODEL")
            .env_remove("RULEGEN_STRATEGY");
        for (key, value) in env {
            command.env(key, value);
        }
        let output = command.output().unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
