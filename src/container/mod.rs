//! Container module for `.fidget` widget files
//!
//! - `document`: the ordered key-value widget document and its load/store
//! - `manager`: the inspect, extract, validate, scaffold and pack operations

mod document;
mod manager;

pub use document::{
    display_value, WidgetDocument, DEFAULT_SCHEMA_VERSION, IMAGE_KEY, META_KEY, NAME_KEY,
    SCHEMA_VERSION_KEY, SOUND_KEY, TYPE_KEY,
};
pub use manager::{
    scaffold_document, ContainerManager, ExtractReport, InspectReport, PackReport, PackedAsset,
    ScaffoldReport, ValidationReport, FIDGET_EXTENSION, META_FILE,
};
