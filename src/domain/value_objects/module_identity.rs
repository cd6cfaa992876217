//! Module identity value object (group, name, version)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PortablePath;
use crate::error::RulegenResult;

/// File name of the model manifest inside its module folder.
pub const MANIFEST_FILE_NAME: &str = "rules-model";

/// Group/name/version triple identifying a build unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleIdentity {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ModuleIdentity {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Folder holding the manifest: `META-INF/<group>/<name>/<version>`.
    pub fn manifest_folder(&self) -> RulegenResult<PortablePath> {
        PortablePath::parse(&format!(
            "META-INF/{}/{}/{}",
            self.group, self.name, self.version
        ))
    }

    /// Well-known manifest location for this module.
    pub fn manifest_path(&self) -> RulegenResult<PortablePath> {
        let folder = self.manifest_folder()?;
        Ok(folder.join(&PortablePath::parse(MANIFEST_FILE_NAME)?))
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
