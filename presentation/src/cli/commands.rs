//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for ranking results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Ranked table, per-candidate vote breakdowns and recommendations
    Full,
    /// Ranked table and recommendations only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for tablevote_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for tablevote
#[derive(Parser, Debug)]
#[command(name = "tablevote")]
#[command(author, version, about = "Rank restaurant candidates from group votes")]
#[command(long_about = r#"
tablevote ranks a group's restaurant candidates from weighted like/dislike votes.

Each candidate receives a composite score (net votes plus engagement and
recency boosts), a consensus level, an optional badge and a vote trend.
When the group is split, compromise and alternative picks are suggested.

The input is a JSON snapshot holding candidates, votes and group members.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./tablevote.toml      Project-level config
3. ~/.config/tablevote/config.toml   Global config

Example:
  tablevote group.json
  tablevote group.json -o full --now 2026-06-15T19:00:00Z
  tablevote group.json -o json --audit-log rankings.jsonl
"#)]
pub struct Cli {
    /// Path to the group snapshot JSON (not required with --show-config)
    pub snapshot: Option<PathBuf>,

    /// Reference time for recency scoring (RFC 3339). Defaults to the current time
    #[arg(long, value_name = "RFC3339")]
    pub now: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Skip compromise and alternative recommendations
    #[arg(long)]
    pub no_recommendations: bool,

    /// Append a JSONL audit record for this run to the given file
    #[arg(long, value_name = "PATH")]
    pub audit_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress configuration warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
