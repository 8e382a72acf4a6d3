//! HTTP fetching and the concurrent per-source ingest pipeline.

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::cache::StringCache;
use crate::config::Source;
use crate::parser;

#[cfg(test)]
use mockall::automock;

const TIMEOUT_SECS: u64 = 30;

/// Maximum size per blacklist payload (10 MB). Domain lists in the wild top
/// out around a couple of megabytes, so this leaves ample margin.
const MAX_LIST_SIZE: usize = 10 * 1024 * 1024;

/// Retrieval capability: GET a URL, return the body as text.
///
/// A trait seam so the coordinator can be exercised in tests without a
/// network (see the mockall-based tests below).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP client for fetching lists.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a new fetcher with default settings.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(format!("listforge/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for Fetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP {} from {}", response.status(), url);
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > MAX_LIST_SIZE {
                anyhow::bail!(
                    "Response too large: {} bytes (max: {} bytes)",
                    content_length,
                    MAX_LIST_SIZE
                );
            }
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if body.len() > MAX_LIST_SIZE {
            anyhow::bail!(
                "Downloaded content too large: {} bytes (max: {} bytes)",
                body.len(),
                MAX_LIST_SIZE
            );
        }

        Ok(body)
    }
}

/// Terminal state of one source's fetch-and-parse task.
#[derive(Debug)]
pub struct SourceOutcome {
    pub url: String,
    /// Number of entries added to the shared cache, or why the task failed.
    pub result: Result<usize>,
}

impl SourceOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Fetch and parse every configured source concurrently.
///
/// One task per source, no fan-out bound; all tasks share the cache by `Arc`.
/// Each failure (fetch error or panic) is contained at the task boundary and
/// reported in its outcome, so one bad source never discards the entries the
/// others already added. Returns once every task has reached a terminal
/// state.
pub async fn fetch_sources(
    fetcher: Arc<dyn Fetch>,
    sources: Vec<Source>,
    cache: Arc<StringCache>,
) -> Vec<SourceOutcome> {
    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| {
            let fetcher = Arc::clone(&fetcher);
            let cache = Arc::clone(&cache);
            let url = source.url.clone();
            let handle = tokio::spawn(async move { ingest(&*fetcher, &source, &cache).await });
            (url, handle)
        })
        .collect();

    let joined = join_all(handles.into_iter().map(|(url, handle)| async move {
        let result = match handle.await {
            Ok(result) => result,
            // A panicking task is a failed source, not a failed run.
            Err(join_error) => Err(anyhow::anyhow!("Fetch task aborted: {}", join_error)),
        };
        SourceOutcome { url, result }
    }))
    .await;

    for outcome in &joined {
        if let Err(e) = &outcome.result {
            error!("Failed to fetch {}: {:#}", outcome.url, e);
        }
    }

    joined
}

/// Fetch one source and feed its parsed entries into the shared cache.
async fn ingest(fetcher: &dyn Fetch, source: &Source, cache: &StringCache) -> Result<usize> {
    let body = fetcher.fetch(&source.url).await?;

    let mut added = 0usize;
    for entry in parser::entries(&body, source) {
        cache.add(entry);
        added += 1;
    }

    info!("Added: {}", source.url);

    Ok(added)
}
