//! Output formatting

use serde::Serialize;

use crate::container::{ExtractReport, InspectReport, PackReport, ScaffoldReport, ValidationReport};
use crate::output::human::format_human;
use crate::output::json::format_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Result of one operation, ready to be rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum Report {
    Inspect(InspectReport),
    Extract(ExtractReport),
    Validate(ValidationReport),
    Scaffold(ScaffoldReport),
    Pack(PackReport),
}

impl Report {
    /// Whether the process should exit successfully after printing this report
    pub fn is_success(&self) -> bool {
        match self {
            Report::Validate(report) => report.valid,
            _ => true,
        }
    }
}

pub fn format_output(report: &Report, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}
