//! Fidgety - build, inspect, validate and unpack `.fidget` widget files
//!
//! A `.fidget` file is a JSON object bundling a widget's name, type tag,
//! optional metadata and base64-encoded image/sound assets.
//!
//! # Example
//!
//! ```no_run
//! use fidgety::{format_output, ContainerManager, OutputFormat, Report};
//! use std::path::Path;
//!
//! let manager = ContainerManager::new();
//! let report = manager.inspect(Path::new("myWidget.fidget")).unwrap();
//! println!("{}", format_output(&Report::Inspect(report), &OutputFormat::Human));
//! ```

pub mod cli;
pub mod container;
pub mod error;
pub mod logging;
pub mod output;

pub use container::{ContainerManager, WidgetDocument};
pub use error::{FidgetError, Result};
pub use output::{format_output, OutputFormat, Report};
