//! Cache Store Module
//!
//! Main cache engine: a typed key/value map with per-entry TTL, lazy expiry
//! on read and support for periodic background sweeping.

use std::collections::HashMap;

use thiserror::Error;

use crate::cache::CacheEntry;
use crate::cache::CacheStats;

// == Cache Error ==
/// The only caller-observable cache failure: a zero TTL handed to `set`.
///
/// A zero TTL is a programming error on the caller's side, not a runtime
/// condition; "store without expiry" is expressed as [`Ttl::NoExpiry`], never
/// as a zero duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// TTL must be a positive number of seconds
    #[error("ttl must be a positive number of seconds")]
    InvalidTtl,
}

// == TTL Argument ==
/// Expiry policy for a single `set` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ttl {
    /// Use the TTL the store was constructed with
    #[default]
    Default,
    /// The entry never expires
    NoExpiry,
    /// Expire after the given number of seconds (must be > 0)
    Seconds(u64),
}

// == TTL Cache ==
/// In-memory key/value store with per-entry time-to-live.
///
/// Keys are opaque strings derived by callers; values are a single type per
/// store instance, so each call site gets a statically typed view. Expired
/// entries are dropped lazily on `get` and in bulk by [`TtlCache::sweep_expired`],
/// which a background task invokes at a fixed cadence.
#[derive(Debug)]
pub struct TtlCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds applied when `set` is called with `Ttl::Default`;
    /// None means such entries never expire
    default_ttl: Option<u64>,
}

impl<T: Clone> TtlCache<T> {
    // == Constructor ==
    /// Creates a new TtlCache.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL in seconds for `Ttl::Default` sets; None = no expiry
    pub fn new(default_ttl: Option<u64>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// An entry whose deadline has passed is removed as a side effect and
    /// reported as a miss, so callers never observe a logically expired value
    /// even between sweeps. A miss and an expired-and-removed hit are
    /// indistinguishable: both return None.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<T> {
        if let Some(entry) = self.entries.get(key) {
            // Lazy expiry check
            if entry.is_expired() {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Set ==
    /// Stores a key-value pair with the given expiry policy.
    ///
    /// If the key already exists, the prior entry is fully replaced.
    /// A resolved TTL of zero seconds fails with [`CacheError::InvalidTtl`]
    /// and leaves the store untouched.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Expiry policy (`Default`, `NoExpiry` or `Seconds(n)`)
    pub fn set(&mut self, key: String, value: T, ttl: Ttl) -> Result<(), CacheError> {
        let ttl_seconds = match ttl {
            Ttl::Default => self.default_ttl,
            Ttl::NoExpiry => None,
            Ttl::Seconds(secs) => Some(secs),
        };

        if ttl_seconds == Some(0) {
            return Err(CacheError::InvalidTtl);
        }

        let entry = CacheEntry::new(value, ttl_seconds);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// This bounds memory growth from keys that are written once and never
    /// read again, which lazy expiry alone would leak. Returns the number of
    /// entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a pre-built entry, bypassing TTL resolution. Lets tests place
    /// entries with deadlines in the past instead of sleeping through them.
    #[cfg(test)]
    pub(crate) fn insert_entry(&mut self, key: String, entry: CacheEntry<T>) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }
}
