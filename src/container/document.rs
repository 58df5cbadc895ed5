//! Widget document definition
//!
//! A `WidgetDocument` is the in-memory form of a `.fidget` file. It is kept
//! as an ordered JSON object rather than a fixed struct so that keys this
//! tool does not know about survive a load/store cycle untouched.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{FidgetError, Result};

pub const NAME_KEY: &str = "name";
pub const TYPE_KEY: &str = "type";
pub const SCHEMA_VERSION_KEY: &str = "schemaVersion";
pub const IMAGE_KEY: &str = "image";
pub const SOUND_KEY: &str = "sound";
pub const META_KEY: &str = "meta";

/// Schema version assumed when a document does not declare one
pub const DEFAULT_SCHEMA_VERSION: i64 = 1;

/// A `.fidget` widget definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetDocument {
    fields: Map<String, Value>,
}

impl WidgetDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse document text. `path` is only used for error reporting.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|source| FidgetError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(FidgetError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Read and parse a document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| FidgetError::io(path, e))?;
        Self::parse(&text, path)
    }

    /// Render as JSON with 2-space indentation
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Set a field, keeping its position if it already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn name(&self) -> Option<&Value> {
        self.get(NAME_KEY)
    }

    pub fn type_tag(&self) -> Option<&Value> {
        self.get(TYPE_KEY)
    }

    pub fn schema_version(&self) -> Option<&Value> {
        self.get(SCHEMA_VERSION_KEY)
    }

    pub fn meta(&self) -> Option<&Map<String, Value>> {
        self.get(META_KEY).and_then(Value::as_object)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Render a field for display: strings as-is, anything else as JSON text
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_path() -> PathBuf {
        PathBuf::from("test.fidget")
    }

    #[test]
    fn test_parse_object() {
        let doc = WidgetDocument::parse(r#"{"name": "spinner", "type": "toggle"}"#, &test_path())
            .unwrap();
        assert_eq!(doc.name(), Some(&json!("spinner")));
        assert_eq!(doc.type_tag(), Some(&json!("toggle")));
        assert!(doc.schema_version().is_none());
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let result = WidgetDocument::parse("[1, 2, 3]", &test_path());
        assert!(matches!(result, Err(FidgetError::NotAnObject { .. })));
    }

    #[test]
    fn test_parse_rejects_broken_json() {
        let result = WidgetDocument::parse(r#"{"name": "a",}"#, &test_path());
        assert!(matches!(result, Err(FidgetError::Json { .. })));
    }

    #[test]
    fn test_unknown_keys_keep_order() {
        let text = r#"{"zeta": 1, "name": "a", "alpha": {"nested": true}}"#;
        let mut doc = WidgetDocument::parse(text, &test_path()).unwrap();
        doc.insert(IMAGE_KEY, "AAEC");

        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["zeta", "name", "alpha", "image"]);
        assert_eq!(doc.get("alpha"), Some(&json!({"nested": true})));
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut doc =
            WidgetDocument::parse(r#"{"image": "old", "name": "a"}"#, &test_path()).unwrap();
        doc.insert(IMAGE_KEY, "new");

        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["image", "name"]);
        assert_eq!(doc.get(IMAGE_KEY), Some(&json!("new")));
    }

    #[test]
    fn test_pretty_string_uses_two_spaces() {
        let mut doc = WidgetDocument::new();
        doc.insert(NAME_KEY, "a");
        assert_eq!(doc.to_pretty_string().unwrap(), "{\n  \"name\": \"a\"\n}");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = WidgetDocument::load(&temp_dir.path().join("missing.fidget"));
        assert!(matches!(result, Err(FidgetError::Io { .. })));
    }

    #[test]
    fn test_meta_accessor() {
        let doc = WidgetDocument::parse(
            r#"{"meta": {"author": "you", "created": "2025-07-01"}}"#,
            &test_path(),
        )
        .unwrap();
        let meta = doc.meta().unwrap();
        assert_eq!(meta.get("author"), Some(&json!("you")));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("plain")), "plain");
        assert_eq!(display_value(&json!(2)), "2");
        assert_eq!(display_value(&json!(null)), "null");
    }
}
