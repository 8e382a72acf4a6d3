//! Final sort, canonicalization, and output writing.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::cache::StringCache;

const LIST_SUFFIX: &str = ".txt";
const HASH_SUFFIX: &str = ".md5";

/// The finished, canonicalized list body.
#[derive(Debug)]
pub struct Aggregate {
    /// Newline-joined entries, sorted ascending, each with a trailing `.`.
    pub body: String,
    /// Number of unique entries in `body`.
    pub count: usize,
}

/// Canonical fully-qualified form of a domain: exactly one trailing `.`.
fn canonicalize(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    }
}

/// Sort the accumulated cache, canonicalize every entry, and drop duplicates.
///
/// Dedup builds a second cache and relies on its windowed `contains`: the
/// input is sorted, so each duplicate lands adjacent to its first occurrence
/// and the window always catches it.
pub fn finalize(cache: &StringCache) -> Aggregate {
    cache.sort();

    let deduped = StringCache::new();
    for domain in cache.snapshot() {
        let canonical = canonicalize(&domain);
        if !deduped.contains(&canonical) {
            deduped.add(&canonical);
        }
    }

    debug!("deduplicated {} entries down to {}", cache.len(), deduped.len());

    Aggregate {
        body: deduped.all(),
        count: deduped.len(),
    }
}

/// Write the aggregated list to `<dir>/<identifier>.txt`.
///
/// The write goes through a temp file in the same directory and an atomic
/// rename, replacing any previous output in one step.
pub fn write_list(dir: &Path, identifier: &str, body: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{}{}", identifier, LIST_SUFFIX));
    write_atomic(&path, body.as_bytes())?;
    Ok(path)
}

/// Compute the MD5 of the written list file and persist it to
/// `<dir>/<identifier>.md5` as lowercase hex. Returns the digest string.
pub fn write_checksum(dir: &Path, identifier: &str, list_path: &Path) -> Result<String> {
    let data = std::fs::read(list_path)
        .with_context(|| format!("Failed to read list file: {:?}", list_path))?;
    let digest = format!("{:x}", md5::compute(&data));

    let path = dir.join(format!("{}{}", identifier, HASH_SUFFIX));
    write_atomic(&path, digest.as_bytes())?;

    Ok(digest)
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut temp_file = NamedTempFile::new_in(parent.unwrap_or(Path::new(".")))
        .with_context(|| format!("Failed to create temporary file for {:?}", path))?;

    temp_file.write_all(contents)?;
    temp_file.as_file().sync_all()?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist output file: {:?}", path))?;

    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn domain_strategy() -> impl Strategy<Value = String> {
        "[a-z0-9]{1,12}\\.[a-z]{2,4}"
    }

    proptest! {
        /// Every finalized entry ends with exactly one trailing dot and is
        /// never empty
        #[test]
        fn prop_canonical_total(domains in prop::collection::vec(domain_strategy(), 0..100)) {
            let cache = StringCache::new();
            for d in &domains {
                cache.add(d);
            }
            let aggregate = finalize(&cache);

            for entry in aggregate.body.lines() {
                prop_assert!(entry.ends_with('.'));
                prop_assert!(!entry.ends_with(".."));
                prop_assert!(entry.len() > 1);
            }
        }

        /// Finalized output is sorted with no adjacent duplicates
        #[test]
        fn prop_output_sorted_unique(domains in prop::collection::vec(domain_strategy(), 0..100)) {
            let cache = StringCache::new();
            for d in &domains {
                cache.add(d);
            }
            let aggregate = finalize(&cache);

            let lines: Vec<_> = aggregate.body.lines().collect();
            for pair in lines.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        /// Finalize is idempotent
        #[test]
        fn prop_finalize_idempotent(domains in prop::collection::vec(domain_strategy(), 0..100)) {
            let cache = StringCache::new();
            for d in &domains {
                cache.add(d);
            }
            let first = finalize(&cache);

            let again = StringCache::new();
            for line in first.body.lines() {
                again.add(line);
            }
            let second = finalize(&again);

            prop_assert_eq!(first.body, second.body);
            prop_assert_eq!(first.count, second.count);
        }
    }
}
