//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listforge")]
#[command(author, version, about = "Aggregate remote domain blacklists into one sorted list")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source config file (JSON)
    #[arg(short, long, default_value = "sources/default.json", global = true)]
    pub config: PathBuf,

    /// Quiet mode (errors only, for cron)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all sources and write the aggregated list plus its checksum
    Aggregate {
        /// Directory for <identifier>.txt and <identifier>.md5
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Fetch and aggregate but write nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// List the configured blacklist sources
    Sources,

    /// Show version
    Version,
}
