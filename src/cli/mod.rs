//! Command-line parsing for the pitch-sequence aggregator.
//!
//! The surface is deliberately tiny: one optional positional argument naming
//! the data directory, nothing else. Everything interesting happens in the
//! pipeline.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "pseq",
    version,
    about = "Aggregate at-bat outcomes by trailing pitch sequence from PITCHf/x game logs"
)]
pub struct Cli {
    /// Root directory searched recursively for inning game-log files
    /// (defaults to ./data/).
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}
