//! CLI argument parsing for Enlace

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for correlation reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "enlace")]
#[command(version)]
#[command(about = "Correlate network request events into ordered exchange summaries", long_about = None)]
pub struct Cli {
    /// Snapshot file: JSON with "requests" and "events" lists
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Filter summaries by category (e.g., -e types=xhr,img or -e types=all)
    #[arg(short = 'e', long = "expr", value_name = "EXPR")]
    pub filter: Option<String>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
