//! CLI argument definitions for drills.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drills")]
#[command(version)]
#[command(about = "Console drills: temperature logging and multiplication tables", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    drills temperature         Log readings, then type 'q' for the report\n    drills table               Print a multiplication table and practice"
)]
pub struct Cli {
    /// Disable colored output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr (overridden by DRILLS_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a YAML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record temperatures and report the count and average
    Temperature {
        /// Lowest accepted reading
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,
        /// Highest accepted reading
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
        /// Unit named in the out-of-range notice
        #[arg(long)]
        unit: Option<String>,
        /// Read entries from a file instead of the console
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
    },
    /// Print a multiplication table with an optional practice question
    Table {
        /// Seed for the practice question
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the effective configuration
    Config,
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
