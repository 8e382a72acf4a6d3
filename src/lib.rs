//! # listforge - Domain Blacklist Aggregator
//!
//! Fetches multiple remotely hosted domain blacklists concurrently, merges
//! them into one deduplicated, sorted, canonicalized list, and writes the
//! result next to an MD5 checksum of the file.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       listforge                           │
//! ├───────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                               │
//! │    └── Commands: aggregate, sources, version              │
//! ├───────────────────────────────────────────────────────────┤
//! │  Config (serde_json)                                      │
//! │    └── {identifier, blacklists: [{url, skipLines, type}]} │
//! ├───────────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls)                               │
//! │    └── one tokio task per source, panic-isolated          │
//! ├───────────────────────────────────────────────────────────┤
//! │  Parser (basic / host formats)                            │
//! │    └── feeds the shared StringCache                       │
//! ├───────────────────────────────────────────────────────────┤
//! │  Finalize                                                 │
//! │    └── sort, canonicalize, dedupe, write .txt + .md5      │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use listforge::cache::StringCache;
//! use listforge::config::Acl;
//! use listforge::fetcher::{fetch_sources, Fetcher};
//! use listforge::finalize::{finalize, write_checksum, write_list};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let acl = Acl::load("sources/default.json")?;
//!
//!     let fetcher = Arc::new(Fetcher::new()?);
//!     let cache = Arc::new(StringCache::new());
//!     fetch_sources(fetcher, acl.blacklists.clone(), Arc::clone(&cache)).await;
//!
//!     let aggregate = finalize(&cache);
//!     let list_path = write_list(Path::new("."), &acl.identifier, &aggregate.body)?;
//!     write_checksum(Path::new("."), &acl.identifier, &list_path)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Thread-safe sortable string cache backing deduplication
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - JSON source configuration parsing and validation
//! - [`fetcher`] - HTTP client and the concurrent per-source pipeline
//! - [`finalize`] - Sorting, canonicalization, and output writing
//! - [`parser`] - Line parsers for the supported list formats
//! - [`utils`] - Formatting helpers

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fetcher;
pub mod finalize;
pub mod parser;
pub mod utils;

pub use cli::{Cli, Commands};
pub use config::Acl;
