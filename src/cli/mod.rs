pub mod setup;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analytics::DEFAULT_RANK_LIMIT;
use crate::io::OutputFormat as WriterFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Terminal,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for WriterFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => WriterFormat::Terminal,
            OutputFormat::Json => WriterFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "impact-tracker")]
#[command(about = "Impact metrics for nonprofit program records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to the nearest .impact-tracker.toml)
    #[arg(long, global = true, env = "IMPACT_TRACKER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank programs by composite impact score
    Rank {
        /// JSON file containing an array of program records
        records: PathBuf,

        /// Maximum number of programs to show
        #[arg(long, visible_alias = "top", default_value_t = DEFAULT_RANK_LIMIT)]
        limit: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Metrics for one record, including growth against its prior period
    Metrics {
        /// JSON file containing an array of program records
        records: PathBuf,

        /// Record id
        id: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Totals and averages across all programs
    Summary {
        /// JSON file containing an array of program records
        records: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Per-period beneficiaries, cost and outcome improvement
    Trends {
        /// JSON file containing an array of program records
        records: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Show records after dictionary and delta encoding
    Compress {
        /// JSON file containing an array of program records
        records: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Write a default configuration file in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}
