//! Output Rendering
//!
//! Human-readable text or a JSON document for scripting.

use std::fmt::Write as _;

use crate::application::{GenerateOutcome, GenerateReport};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render `outcome` in `format`.
pub fn render(outcome: &GenerateOutcome, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome)),
        OutputFormat::Json => serde_json::to_string_pretty(outcome),
    }
}

fn render_text(outcome: &GenerateOutcome) -> String {
    match outcome {
        GenerateOutcome::Skipped { policy } => {
            format!("Model generation skipped (policy {})\n", policy)
        }
        GenerateOutcome::CapabilityMissing { marker } => format!(
            "Model generation not enabled: no dependency named '{}'\n",
            marker
        ),
        GenerateOutcome::Generated(report) => render_report(report),
    }
}

fn render_report(report: &GenerateReport) -> String {
    let mut out = String::new();
    let verb = if report.dry_run { "Would write" } else { "Written" };

    if report.dry_run {
        let _ = writeln!(out, "Dry run: nothing was written or deleted");
    }
    let _ = writeln!(
        out,
        "Model for {} (strategy {})",
        report.module, report.strategy
    );

    let _ = writeln!(out, "  {} ({}):", verb, report.generated.len());
    for file in &report.generated {
        let _ = writeln!(out, "    -> {}", file.path.display());
    }
    let _ = writeln!(out, "  Manifest: {}", report.manifest.path.display());
    let _ = writeln!(out, "  Source root: {}", report.source_root.display());

    if let Some(retirement) = &report.retirement {
        let verb = if report.dry_run { "Would delete" } else { "Deleted" };
        let _ = writeln!(out, "  {} ({}):", verb, retirement.deleted.len());
        for path in &retirement.deleted {
            let _ = writeln!(out, "    [DEL] {}", path.display());
        }
        if !retirement.residual.is_empty() {
            let _ = writeln!(
                out,
                "  Not deleted ({}) below {}:",
                retirement.residual.len(),
                retirement.search_root.display()
            );
            for path in &retirement.residual {
                let _ = writeln!(out, "    {}", path);
            }
        }
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "  Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            let _ = writeln!(out, "    {}", warning);
        }
    }
    out
}
