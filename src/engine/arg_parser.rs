use clap::Parser;
use std::path::PathBuf;

use crate::utils::config::{DEFAULT_MSG_PREFIX_LEN, DEFAULT_TOP_GROUPS};

/// Parallel summarizer for folders of line-delimited JSON log files.
#[derive(Clone, Parser)]
#[command(name = "logsum")]
#[command(about = "Summarize a folder of JSONL log files: top message groups per category.")]
pub struct Cli {
    /// Folder containing the log files (nested folders are walked).
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Rows shown per category table.
    #[arg(long, short = 't', default_value_t = DEFAULT_TOP_GROUPS)]
    pub top: usize,

    /// Emit the report as pretty JSON instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Verbose output (debug logging and a progress bar).
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Fail fast on the first unreadable file instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Exclude patterns (glob syntax). Can specify multiple: -e pattern1 pattern2
    #[arg(long, short = 'e', num_args = 1..)]
    pub exclude: Vec<String>,

    /// Override worker thread count. Default: max(1, available - 1), capped at file count.
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Prefix length used to group near-duplicate messages.
    #[arg(long, default_value_t = DEFAULT_MSG_PREFIX_LEN)]
    pub prefix_len: usize,
}
