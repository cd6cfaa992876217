//! Generate command handler
//!
//! Resolves configuration (CLI > environment > rulegen.toml > defaults), runs
//! the generate use case and prints the outcome.

use std::path::Path;

use anyhow::{Context, Result};

use rulegen::config::{Config, CONFIG_FILE_NAME};
use rulegen::presentation::{create_generate_use_case, render, GenerateArgs, OutputFormat};
use rulegen::RulegenError;

/// Execute the generate command
pub fn cmd_generate(args: &GenerateArgs, json: bool) -> Result<()> {
    let root = args.project_dir.as_path();
    if !root.is_dir() {
        return Err(RulegenError::DirectoryNotFound {
            path: root.to_path_buf(),
        }
        .into());
    }

    let config = load_config(args, root)?;
    let mut project = config.into_project(root)?;
    let module = project.module().clone();

    let use_case = create_generate_use_case(&project, &config);
    let outcome = use_case
        .execute(&mut project, &config.generate_options(args.dry_run))
        .with_context(|| format!("model generation failed for {}", module))?;

    let rendered = render(&outcome, OutputFormat::from_json_flag(json))
        .context("failed to render generate result")?;
    if json {
        println!("{}", rendered);
    } else {
        print!("{}", rendered);
    }
    Ok(())
}

fn load_config(args: &GenerateArgs, root: &Path) -> Result<Config> {
    let path = args
        .config
        .clone()
        .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));

    let (config, warnings) = Config::load_with_warnings(&path)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let mut config = config.with_env_overrides()?;
    if let Some(policy) = args.generate_model {
        config.generation.policy = policy;
    }
    if let Some(strategy) = args.strategy {
        config.generation.strategy = strategy;
    }
    for (key, value) in &args.properties {
        config
            .generation
            .properties
            .insert(key.clone(), value.clone());
    }
    Ok(config)
}
