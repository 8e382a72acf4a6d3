//! Aggregate command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::cache::StringCache;
use crate::config::Acl;
use crate::fetcher::{fetch_sources, Fetcher};
use crate::finalize::{finalize, write_checksum, write_list};
use crate::utils::format_count;

/// Run the aggregate command.
///
/// Per-source failures are contained: the run carries on with whatever the
/// other sources produced. Only config and final output I/O are fatal.
pub async fn run(config_path: &Path, output_dir: &Path, dry_run: bool) -> Result<()> {
    let acl = Acl::load(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    info!("using {:?}", config_path);

    let fetcher = Arc::new(Fetcher::new()?);
    let cache = Arc::new(StringCache::new());

    let outcomes = fetch_sources(fetcher, acl.blacklists.clone(), Arc::clone(&cache)).await;

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        warn!("{} of {} sources failed", failed, outcomes.len());
    }

    let aggregate = finalize(&cache);

    info!(
        "aggregated and sorted {} domains",
        format_count(aggregate.count)
    );

    if dry_run {
        println!(
            "[DRY RUN] {} domains from {} sources, nothing written",
            format_count(aggregate.count),
            outcomes.len() - failed
        );
        return Ok(());
    }

    let list_path = write_list(output_dir, &acl.identifier, &aggregate.body)?;
    let digest = write_checksum(output_dir, &acl.identifier, &list_path)?;

    info!("md5: {}", digest);

    println!(
        "[OK] {} domains written to {:?}",
        format_count(aggregate.count),
        list_path
    );

    Ok(())
}
