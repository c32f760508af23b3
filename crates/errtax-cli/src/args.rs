//! Command-line argument definitions for the errtax CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the definition directory, the output
//! path, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the errtax taxonomy compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the definition files
    #[arg(help = "Directory of *.errors.yaml / *.metadata.yaml pairs")]
    pub input: String,

    /// Path to the output JSON file
    #[arg(short, long, default_value = "taxonomy.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Compile and report errors without writing any output
    #[arg(long)]
    pub check: bool,
}
