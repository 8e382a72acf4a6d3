//! listforge - Domain Blacklist Aggregator
//!
//! Merges remote domain blacklists into one sorted, deduplicated list.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use listforge::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Aggregate {
            output_dir,
            dry_run,
        } => listforge::commands::aggregate::run(&cli.config, &output_dir, dry_run).await,
        Commands::Sources => listforge::commands::sources::run(&cli.config).await,
        Commands::Version => {
            println!("listforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
