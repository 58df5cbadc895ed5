//! Command-line interface

pub mod args;

pub use args::{write_help, Args, SubCommand};
