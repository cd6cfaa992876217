//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RulegenError, RulegenResult};

use super::types::Config;

/// Overrides `[generation] policy`
pub const ENV_GENERATE_MODEL: &str = "RULEGEN_GENERATE_MODEL";
/// Overrides `[generation] strategy`
pub const ENV_STRATEGY: &str = "RULEGEN_STRATEGY";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown configuration key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RulegenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RulegenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RulegenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|dotted| {
            let key = dotted.rsplit('.').next().unwrap_or(dotted).to_string();
            ConfigWarning {
                line: key_line(&content, &key),
                suggestion: suggest_key(&key).map(str::to_string),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (RULEGEN_* prefix)
pub fn with_env_overrides(config: Config) -> RulegenResult<Config> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> RulegenResult<Config> {
    // RULEGEN_GENERATE_MODEL
    if let Some(policy) = lookup(ENV_GENERATE_MODEL).filter(|v| !v.trim().is_empty()) {
        config.generation.policy = policy.parse()?;
    }

    // RULEGEN_STRATEGY
    if let Some(strategy) = lookup(ENV_STRATEGY).filter(|v| !v.trim().is_empty()) {
        config.generation.strategy = strategy.parse()?;
    }

    Ok(config)
}

/// 1-based line on which `key` is assigned, or first mentioned.
fn key_line(content: &str, key: &str) -> Option<usize> {
    let assigned = content.lines().position(|line| {
        line.trim_start()
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='))
    });
    assigned
        .or_else(|| content.lines().position(|line| line.contains(key)))
        .map(|idx| idx + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "module",
    "group",
    "name",
    "version",
    "dependencies",
    "scope",
    "path",
    "build",
    "directory",
    "output_directory",
    "test_source_directory",
    "resource_directories",
    "generation",
    "policy",
    "strategy",
    "capability_marker",
    "rule_suffix",
    "generated_suffix",
    "properties",
];

/// Closest known key within two edits.
fn suggest_key(unknown: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[b.len()]
}
