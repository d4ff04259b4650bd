//! Command-line interface definitions for `tablekit`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use simplelog::LevelFilter;

/// Resolve data-table options documents.
#[derive(Parser, Debug)]
#[command(name = "tablekit", about = "Resolve data-table options", version)]
pub struct Cli {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Logging controls.
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Maximum level to log (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    pub log_level: LevelFilter,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a JSON options document and print the result.
    Resolve {
        /// Path to the options document.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print compact JSON instead of pretty-printed JSON.
        #[arg(long)]
        compact: bool,
    },
    /// Print the resolution of an empty options document.
    Defaults {
        /// Print compact JSON instead of pretty-printed JSON.
        #[arg(long)]
        compact: bool,
    },
}
