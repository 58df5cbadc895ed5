//! Human-readable output formatting

use crate::container::{display_value, DEFAULT_SCHEMA_VERSION};
use crate::output::formatter::Report;
use bytesize::ByteSize;

const NAME_PLACEHOLDER: &str = "[none]";
const TYPE_PLACEHOLDER: &str = "[unknown]";

pub fn format_human(report: &Report) -> String {
    match report {
        Report::Inspect(info) => {
            let schema_version = info
                .schema_version
                .as_ref()
                .map(display_value)
                .unwrap_or_else(|| format!("{} (implicit)", DEFAULT_SCHEMA_VERSION));

            let mut output = format!(
                "{}\n  name:          {}\n  type:          {}\n  schemaVersion: {}\n",
                info.file_name,
                info.name.as_deref().unwrap_or(NAME_PLACEHOLDER),
                info.type_tag.as_deref().unwrap_or(TYPE_PLACEHOLDER),
                schema_version
            );
            for key in &info.contains {
                output.push_str(&format!("  contains:      {}\n", key));
            }
            output.push_str(&format!(
                "  size:          {} bytes ({})",
                info.size_bytes,
                ByteSize(info.size_bytes)
            ));
            output
        }
        Report::Extract(info) => format!(
            "Extracted '{}' to {} ({})",
            info.key,
            info.out,
            ByteSize(info.bytes_written as u64)
        ),
        Report::Validate(info) => {
            if info.valid {
                format!("JSON structure valid in {}", info.path)
            } else {
                format!(
                    "Invalid JSON in {}: {}",
                    info.path,
                    info.error.as_deref().unwrap_or("unknown error")
                )
            }
        }
        Report::Scaffold(info) => format!("Created new .fidget scaffold at {}", info.path),
        Report::Pack(info) => {
            let mut output = format!("Packed {} -> {}", info.folder, info.out);
            for asset in &info.embedded {
                output.push_str(&format!(
                    "\n  {:<6} <- {} ({})",
                    asset.field,
                    asset.file,
                    ByteSize(asset.size_bytes)
                ));
            }
            output
        }
    }
}
