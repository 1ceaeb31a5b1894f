//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Package the files that changed between two folders into a zip archive
///
/// Lists files found only at the top level of SOURCE in
/// SOURCE/OrphanedFiles.txt, then packs that list together with every file
/// in DESTINATION that is new or differs from SOURCE into
/// SOURCE/ChangedFiles.zip.
///
/// Examples:
///   changepack                                  # prompt for both folders
///   changepack -s ./release-1 -d ./release-2    # no folder prompts
///   changepack -s a -d b --overwrite --no-pause # fully unattended
#[derive(Parser, Debug)]
#[command(name = "changepack")]
#[command(author, version, about)]
pub struct Cli {
    /// Source folder (prompted for when omitted)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<String>,

    /// Destination folder (prompted for when omitted)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<String>,

    /// Settings file (.toml, .json, .yaml or .yml)
    #[arg(short, long, value_name = "FILE", env = "CHANGEPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Overwrite an existing archive without asking
    #[arg(long)]
    pub overwrite: bool,

    /// Write the archive even if it appears to be in use, without asking
    #[arg(long)]
    pub ignore_lock: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit without waiting for a key press
    #[arg(long)]
    pub no_pause: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
