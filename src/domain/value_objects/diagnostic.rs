//! Compiler diagnostics

use std::fmt;

use serde::Serialize;

use super::PortablePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One message reported by the rule compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub file: Option<PortablePath>,
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            file: None,
            line: None,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            file: None,
            line: None,
            message: message.into(),
        }
    }

    /// Attach a source location (1-based line).
    pub fn at(mut self, file: PortablePath, line: usize) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }

    /// Attach a file without a line.
    pub fn in_file(mut self, file: PortablePath) -> Self {
        self.file = Some(file);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{}:{}: {}: {}", file, line, severity, self.message),
            (Some(file), None) => write!(f, "{}: {}: {}", file, severity, self.message),
            _ => write!(f, "{}: {}", severity, self.message),
        }
    }
}
