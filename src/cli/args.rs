//! CLI argument parsing

use clap::{CommandFactory, Parser, Subcommand};
use std::io;
use std::path::PathBuf;

const EXAMPLES: &str = "\
EXAMPLES:
  fidgety inspect myWidget.fidget
  fidgety scaffold coolSpin
  fidgety extract myWidget.fidget --key=image --out=logo.png
  fidgety pack ./src/clicktoggle --out=click.fidget
  fidgety validate anything.fidget";

#[derive(Parser, Debug)]
#[command(name = "fidgety")]
#[command(author, version, about = "Build, inspect, and unpack .fidget widget files", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Inspect a .fidget file's metadata and structure
    Inspect {
        /// Path to the .fidget file
        file: PathBuf,
    },

    /// Extract embedded image or sound from a .fidget file
    Extract {
        /// Path to the .fidget file
        file: PathBuf,

        /// Name of field to extract (e.g. image, sound)
        #[arg(long)]
        key: String,

        /// Output file path
        #[arg(long)]
        out: PathBuf,
    },

    /// Validate the structure of a .fidget file
    Validate {
        /// Path to the .fidget file
        file: PathBuf,
    },

    /// Create a blank .fidget scaffold
    Scaffold {
        /// Name to use for the new .fidget file
        name: String,
    },

    /// Bundle assets from a folder into a .fidget
    Pack {
        /// Folder containing meta.json and optional image.png/sound.mp3
        folder: PathBuf,

        /// Destination .fidget filename
        #[arg(long)]
        out: PathBuf,
    },
}

/// Write the usage text shown when no subcommand is given
pub fn write_help<W: io::Write>(out: &mut W) -> io::Result<()> {
    Args::command().write_help(out)?;
    out.flush()
}
