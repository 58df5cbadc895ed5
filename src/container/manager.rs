//! Container manager implementing the `.fidget` operations
//!
//! Every operation is a single pass over the filesystem and returns a
//! serialisable report. Errors are returned to the caller at the operation
//! boundary; nothing is retried.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::document::{
    display_value, WidgetDocument, IMAGE_KEY, META_KEY, NAME_KEY, SCHEMA_VERSION_KEY, SOUND_KEY,
    TYPE_KEY,
};
use crate::error::{FidgetError, Result};

/// File extension of widget containers
pub const FIDGET_EXTENSION: &str = "fidget";

/// Metadata document expected at the root of a pack folder
pub const META_FILE: &str = "meta.json";

/// Asset fields filled by `pack`, with the file each is read from
pub const PACK_ASSETS: [(&str, &str); 2] = [(IMAGE_KEY, "image.png"), (SOUND_KEY, "sound.mp3")];

/// Fields whose presence `inspect` reports, in display order
pub const INSPECTED_FIELDS: [&str; 3] = [IMAGE_KEY, SOUND_KEY, META_KEY];

pub const DEFAULT_TYPE: &str = "toggle";
pub const SCAFFOLD_CREATED: &str = "2025-07-01";
pub const SCAFFOLD_AUTHOR: &str = "you";

/// Summary produced by `inspect`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub file_name: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub schema_version: Option<Value>,
    pub contains: Vec<String>,
    pub size_bytes: u64,
}

/// Result of `extract`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractReport {
    pub source: String,
    pub key: String,
    pub out: String,
    pub bytes_written: usize,
}

/// Verdict of `validate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub path: String,
    pub valid: bool,
    pub error: Option<String>,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

/// Result of `scaffold`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaffoldReport {
    pub name: String,
    pub path: String,
}

/// One asset embedded by `pack`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackedAsset {
    pub field: String,
    pub file: String,
    pub size_bytes: u64,
}

/// Result of `pack`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackReport {
    pub folder: String,
    pub out: String,
    pub embedded: Vec<PackedAsset>,
}

/// Performs the five `.fidget` operations
///
/// The base directory is where `scaffold` writes new files; all other
/// operations take their paths as given.
#[derive(Debug, Clone)]
pub struct ContainerManager {
    base_dir: PathBuf,
}

impl ContainerManager {
    /// Create a manager that scaffolds into the current directory
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::new(),
        }
    }

    /// Create a manager that scaffolds into `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Summarise a `.fidget` file's metadata and structure
    pub fn inspect(&self, path: &Path) -> Result<InspectReport> {
        let doc = WidgetDocument::load(path)?;
        let size_bytes = fs::metadata(path)
            .map_err(|e| FidgetError::io(path, e))?
            .len();
        debug!(path = %path.display(), fields = doc.len(), "inspected document");

        Ok(InspectReport {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            name: doc.name().map(display_value),
            type_tag: doc.type_tag().map(display_value),
            schema_version: doc.schema_version().cloned(),
            contains: INSPECTED_FIELDS
                .iter()
                .filter(|key| doc.contains(key))
                .map(|key| key.to_string())
                .collect(),
            size_bytes,
        })
    }

    /// Decode a base64 field of a `.fidget` file into `out`
    ///
    /// The output is only created once decoding has succeeded.
    pub fn extract(&self, path: &Path, key: &str, out: &Path) -> Result<ExtractReport> {
        let doc = WidgetDocument::load(path)?;

        let value = doc.get(key).ok_or_else(|| FidgetError::KeyNotFound {
            key: key.to_string(),
            path: path.to_path_buf(),
        })?;
        let encoded = value.as_str().ok_or_else(|| FidgetError::NotAString {
            key: key.to_string(),
        })?;
        // Line-wrapped payloads are accepted; any other stray byte is an error.
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = BASE64
            .decode(compact.as_bytes())
            .map_err(|source| FidgetError::Decode {
                key: key.to_string(),
                source,
            })?;

        write_atomic(out, &bytes)?;
        info!(key, out = %out.display(), bytes = bytes.len(), "extracted asset");

        Ok(ExtractReport {
            source: path.display().to_string(),
            key: key.to_string(),
            out: out.display().to_string(),
            bytes_written: bytes.len(),
        })
    }

    /// Check that a file is syntactically valid JSON
    ///
    /// A parse failure is a verdict, not an error. Only a failed read is.
    pub fn validate(&self, path: &Path) -> Result<ValidationReport> {
        let bytes = fs::read(path).map_err(|e| FidgetError::io(path, e))?;

        let report = match serde_json::from_slice::<Value>(&bytes) {
            Ok(_) => ValidationReport {
                path: path.display().to_string(),
                valid: true,
                error: None,
                line: None,
                column: None,
            },
            Err(e) => ValidationReport {
                path: path.display().to_string(),
                valid: false,
                error: Some(e.to_string()),
                line: Some(e.line()),
                column: Some(e.column()),
            },
        };
        debug!(path = %path.display(), valid = report.valid, "validated document");

        Ok(report)
    }

    /// Write a blank `<name>.fidget` into the base directory, replacing any
    /// existing file of that name
    pub fn scaffold(&self, name: &str) -> Result<ScaffoldReport> {
        let doc = scaffold_document(name);
        let path = self
            .base_dir
            .join(format!("{}.{}", name, FIDGET_EXTENSION));

        write_atomic(&path, doc.to_pretty_string()?.as_bytes())?;
        info!(path = %path.display(), "created scaffold");

        Ok(ScaffoldReport {
            name: name.to_string(),
            path: path.display().to_string(),
        })
    }

    /// Merge `meta.json` and any sibling assets from `folder` into `out`
    pub fn pack(&self, folder: &Path, out: &Path) -> Result<PackReport> {
        let mut doc = WidgetDocument::load(&folder.join(META_FILE))?;
        let mut embedded = Vec::new();

        for (field, file_name) in PACK_ASSETS {
            let asset_path = folder.join(file_name);
            if !asset_path.exists() {
                debug!(asset = %asset_path.display(), "asset not present, skipping");
                continue;
            }

            let bytes = fs::read(&asset_path).map_err(|e| FidgetError::io(&asset_path, e))?;
            doc.insert(field, BASE64.encode(&bytes));
            embedded.push(PackedAsset {
                field: field.to_string(),
                file: file_name.to_string(),
                size_bytes: bytes.len() as u64,
            });
        }

        write_atomic(out, doc.to_pretty_string()?.as_bytes())?;
        info!(folder = %folder.display(), out = %out.display(), assets = embedded.len(), "packed folder");

        Ok(PackReport {
            folder: folder.display().to_string(),
            out: out.display().to_string(),
            embedded,
        })
    }
}

impl Default for ContainerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// The document `scaffold` writes for `name`
pub fn scaffold_document(name: &str) -> WidgetDocument {
    let mut doc = WidgetDocument::new();
    doc.insert(NAME_KEY, name);
    doc.insert(TYPE_KEY, DEFAULT_TYPE);
    doc.insert(IMAGE_KEY, "");
    doc.insert(
        META_KEY,
        json!({
            "created": SCAFFOLD_CREATED,
            "author": SCAFFOLD_AUTHOR,
        }),
    );
    doc.insert(SCHEMA_VERSION_KEY, 1);
    doc
}

/// Write `contents` to a hidden sibling of `path`, then rename it into place
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        FidgetError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
        )
    })?;

    let mut partial_name = OsString::from(".");
    partial_name.push(file_name);
    partial_name.push(".partial");
    let partial_path = path.with_file_name(partial_name);

    if let Err(e) = fs::write(&partial_path, contents) {
        let _ = fs::remove_file(&partial_path);
        return Err(FidgetError::io(&partial_path, e));
    }

    fs::rename(&partial_path, path).map_err(|e| {
        let _ = fs::remove_file(&partial_path);
        FidgetError::io(path, e)
    })
}
