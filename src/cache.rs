//! Thread-safe ordered string cache backing deduplication.
//!
//! [`StringCache`] accumulates entries from concurrent producers behind a
//! single coarse mutex, is sorted exactly once after all producers finish,
//! and from then on answers membership queries by binary search. Contention
//! is low relative to network latency, so one container-wide lock is enough.

use std::sync::Mutex;

/// Sortable, deduplicating container of domain strings.
///
/// Lifecycle: created empty, populated append-only by concurrent fetch tasks
/// (shared via `Arc`), sorted once by the finalizer, then queried read-mostly.
/// `contains` and `remove` assume the cache has been sorted; calling them on
/// an unsorted cache is a precondition violation.
#[derive(Debug, Default)]
pub struct StringCache {
    data: Mutex<Vec<String>>,
}

impl StringCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            data: Mutex::new(Vec::new()),
        }
    }

    /// Append a value, trimming a trailing `\n` then a trailing `\r`.
    ///
    /// Duplicates are accepted here; uniqueness is resolved by the finalizer
    /// after sorting. Safe to call from multiple tasks.
    pub fn add(&self, value: &str) {
        let value = value.strip_suffix('\n').unwrap_or(value);
        let value = value.strip_suffix('\r').unwrap_or(value);

        let mut data = self.data.lock().expect("cache mutex poisoned");
        data.push(value.to_string());
    }

    /// Sort all entries in lexicographic ascending order.
    ///
    /// Must run after every producer has finished adding and before any
    /// `contains` or `remove` call.
    pub fn sort(&self) {
        let mut data = self.data.lock().expect("cache mutex poisoned");
        data.sort_unstable();
    }

    /// Approximate membership test. Precondition: the cache is sorted.
    ///
    /// Inspects a window of up to 3 elements around the binary-search
    /// insertion point (index-1 to index+1, clamped). This is exact whenever
    /// equal values sit adjacent to their insertion point, which holds for
    /// the finalizer's single-pass dedup over sorted input.
    pub fn contains(&self, value: &str) -> bool {
        let data = self.data.lock().expect("cache mutex poisoned");
        let i = match data.binary_search_by(|e| e.as_str().cmp(value)) {
            Ok(i) | Err(i) => i,
        };

        let start = i.saturating_sub(1);
        let end = (i + 1).min(data.len());

        data[start..end].iter().any(|e| e == value)
    }

    /// Remove `value` if present. Precondition: the cache is sorted.
    ///
    /// A no-op when the value is absent. The exact search here deliberately
    /// tightens the historical behavior, which removed whatever element sat
    /// at the insertion point.
    pub fn remove(&self, value: &str) {
        let mut data = self.data.lock().expect("cache mutex poisoned");
        if let Ok(i) = data.binary_search_by(|e| e.as_str().cmp(value)) {
            data.remove(i);
        }
    }

    /// All entries joined by newlines, in current internal order.
    pub fn all(&self) -> String {
        let data = self.data.lock().expect("cache mutex poisoned");
        data.join("\n")
    }

    /// Entry at position `i`, or `None` when out of range.
    pub fn get(&self, i: usize) -> Option<String> {
        let data = self.data.lock().expect("cache mutex poisoned");
        data.get(i).cloned()
    }

    /// Clone of the current contents, in internal order.
    pub fn snapshot(&self) -> Vec<String> {
        let data = self.data.lock().expect("cache mutex poisoned");
        data.clone()
    }

    /// Current entry count.
    pub fn len(&self) -> usize {
        let data = self.data.lock().expect("cache mutex poisoned");
        data.len()
    }

    /// True when no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn domain_strategy() -> impl Strategy<Value = String> {
        "[a-z0-9]{1,12}\\.[a-z]{2,4}"
    }

    proptest! {
        /// Sorting yields non-decreasing adjacent pairs
        #[test]
        fn prop_sort_orders(entries in prop::collection::vec(domain_strategy(), 0..200)) {
            let cache = StringCache::new();
            for e in &entries {
                cache.add(e);
            }
            cache.sort();

            let sorted = cache.snapshot();
            for pair in sorted.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }

        /// Every added entry is found after sorting
        #[test]
        fn prop_contains_finds_added(entries in prop::collection::vec(domain_strategy(), 1..100)) {
            let cache = StringCache::new();
            for e in &entries {
                cache.add(e);
            }
            cache.sort();

            for e in &entries {
                prop_assert!(cache.contains(e));
            }
        }

        /// Add is idempotent with respect to trailing line-ending trimming
        #[test]
        fn prop_add_trims_line_endings(domain in domain_strategy()) {
            let cache = StringCache::new();
            cache.add(&domain);
            cache.add(&format!("{}\n", domain));
            cache.add(&format!("{}\r\n", domain));

            prop_assert_eq!(cache.get(0).unwrap(), domain.clone());
            prop_assert_eq!(cache.get(1).unwrap(), domain.clone());
            prop_assert_eq!(cache.get(2).unwrap(), domain);
        }

        /// Removing an absent value never shrinks the cache
        #[test]
        fn prop_remove_absent_noop(entries in prop::collection::vec(domain_strategy(), 0..100)) {
            let cache = StringCache::new();
            for e in &entries {
                cache.add(e);
            }
            cache.sort();

            let before = cache.len();
            cache.remove("not-a-real-entry.invalid");
            prop_assert_eq!(cache.len(), before);
        }
    }
}
