//! Sources command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Acl;

/// List the configured blacklist sources.
pub async fn run(config_path: &Path) -> Result<()> {
    let acl = Acl::load(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    println!("identifier: {}", acl.identifier);
    println!();
    println!(" FORMAT  SKIP  URL");

    for source in &acl.blacklists {
        println!(
            " {:<6} {:>5}  {}",
            source.format.to_string(),
            source.skip_lines,
            source.url
        );
    }

    println!();
    println!("{} sources configured", acl.blacklists.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_lists_sources() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sources.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"{
                "identifier": "acl",
                "blacklists": [
                    { "url": "https://example.com/a", "skipLines": 1, "type": "basic" }
                ]
            }"#,
        )
        .unwrap();

        run(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_missing_config_fails() {
        let result = run(Path::new("/nonexistent/sources.json")).await;
        assert!(result.is_err());
    }
}
