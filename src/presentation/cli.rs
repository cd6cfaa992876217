//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::GenerationPolicy;
use crate::infrastructure::writer::StrategyKind;

/// Rulegen - compiles rule sources into an executable model
#[derive(Parser, Debug)]
#[command(name = "rulegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the executable model and materialize it into the build tree
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Project root directory
    #[arg(short, long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Configuration file (defaults to <project-dir>/rulegen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generation policy: SKIP_MODEL, YES or YES_WITHDRL
    #[arg(long, value_name = "POLICY")]
    pub generate_model: Option<GenerationPolicy>,

    /// Write strategy: canonical or per-rule
    #[arg(long, value_name = "KIND")]
    pub strategy: Option<StrategyKind>,

    /// System property for the compiler (repeatable)
    #[arg(short = 'D', value_name = "KEY=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Compile and report, but write and delete nothing
    #[arg(long)]
    pub dry_run: bool,
}

/// Parse `key=value`; the value may be empty and may contain `=`.
pub fn parse_property(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
