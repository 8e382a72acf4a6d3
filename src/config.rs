//! Configuration loading and validation.
//!
//! A source file is a JSON document naming the output identifier and the
//! blacklists to aggregate:
//!
//! ```json
//! {
//!   "identifier": "blackhole",
//!   "blacklists": [
//!     { "url": "https://example.com/hosts.txt", "skipLines": 14, "type": "host" },
//!     { "url": "https://example.com/domains.txt", "skipLines": 0, "type": "basic" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Line format of a remote blacklist.
///
/// A closed enum rather than a free-form string: an unrecognized `type` tag
/// fails loudly at load time instead of silently yielding zero entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// One domain per line.
    Basic,
    /// Hosts-file syntax: `address name [# comment]`.
    Host,
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListFormat::Basic => f.write_str("basic"),
            ListFormat::Host => f.write_str("host"),
        }
    }
}

/// One configured remote blacklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Where to fetch the raw list from.
    pub url: String,
    /// Header lines to skip unconditionally before parsing.
    #[serde(default)]
    pub skip_lines: usize,
    /// How to extract a domain from each line.
    #[serde(rename = "type")]
    pub format: ListFormat,
}

/// Top-level aggregation config: output identifier plus the sources to merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acl {
    /// Base name of the output files (`<identifier>.txt`, `<identifier>.md5`).
    pub identifier: String,
    /// Ordered list of blacklists to aggregate.
    pub blacklists: Vec<Source>,
}

impl Acl {
    /// Load and validate an aggregation config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let acl: Acl = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        acl.validate()?;

        Ok(acl)
    }

    /// Validate configuration values.
    ///
    /// The identifier becomes a file name, so it must not be empty or carry
    /// path separators. Source URLs must be http(s).
    pub fn validate(&self) -> Result<()> {
        if self.identifier.is_empty() {
            anyhow::bail!("Config identifier must not be empty");
        }

        if self.identifier.contains('/') || self.identifier.contains("..") {
            anyhow::bail!(
                "Config identifier '{}' must not contain path separators",
                self.identifier
            );
        }

        if self.blacklists.is_empty() {
            anyhow::bail!("Config must list at least one blacklist source");
        }

        for source in &self.blacklists {
            if !source.url.starts_with("https://") && !source.url.starts_with("http://") {
                anyhow::bail!("Blacklist URL must be http(s): {}", source.url);
            }
        }

        Ok(())
    }
}
