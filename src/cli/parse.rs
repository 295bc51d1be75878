//! CLI parse: clap types for penhub. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Penhub CLI - replay and inspect grouped handwriting-stroke sessions
#[derive(Parser)]
#[command(name = "penhub")]
#[command(about = "Replay and inspect grouped handwriting-stroke sessions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (used to find config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a session file and print stroke records
    Replay {
        /// JSON-lines session file
        file: PathBuf,
        /// Only print records of this group
        #[arg(long, conflicts_with = "user")]
        group: Option<String>,
        /// Only print the record of this student
        #[arg(long)]
        user: Option<String>,
        /// Output format (text or json); defaults to the configured format
        #[arg(long)]
        format: Option<String>,
    },
    /// Replay a session file and print per-group totals
    Summary {
        /// JSON-lines session file
        file: PathBuf,
        /// Output format (text or json); defaults to the configured format
        #[arg(long)]
        format: Option<String>,
    },
}
