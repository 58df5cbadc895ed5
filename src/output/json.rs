//! JSON output formatting

use crate::output::formatter::Report;
use serde_json::json;

pub fn format_json(report: &Report) -> String {
    let data = serde_json::to_value(report).unwrap_or(json!(null));
    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
