//! Generation Policy Value Object
//!
//! Controls whether model generation runs and whether the original rule
//! sources are retired once generation succeeds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulegenError;

/// Generation policy for a project
///
/// - `SkipModel`: do not generate
/// - `Yes`: generate, keep rule sources in the compiled output
/// - `YesWithDrl`: generate, then delete the rule sources from the compiled output (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GenerationPolicy {
    #[serde(rename = "SKIP_MODEL", alias = "skip_model")]
    SkipModel,
    #[serde(rename = "YES", alias = "yes")]
    Yes,
    #[default]
    #[serde(rename = "YES_WITHDRL", alias = "yes_withdrl")]
    YesWithDrl,
}

impl GenerationPolicy {
    /// Whether the policy requests generation at all.
    pub fn is_enabled(self) -> bool {
        !matches!(self, GenerationPolicy::SkipModel)
    }

    /// Whether rule sources are deleted after a successful run.
    pub fn retires_sources(self) -> bool {
        matches!(self, GenerationPolicy::YesWithDrl)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GenerationPolicy::SkipModel => "SKIP_MODEL",
            GenerationPolicy::Yes => "YES",
            GenerationPolicy::YesWithDrl => "YES_WITHDRL",
        }
    }
}

impl FromStr for GenerationPolicy {
    type Err = RulegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SKIP_MODEL" => Ok(GenerationPolicy::SkipModel),
            "YES" => Ok(GenerationPolicy::Yes),
            "YES_WITHDRL" => Ok(GenerationPolicy::YesWithDrl),
            _ => Err(RulegenError::InvalidPolicy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GenerationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
