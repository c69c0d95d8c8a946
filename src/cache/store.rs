//! Generation Cache Store Module
//!
//! HashMap storage of generated values combined with LRU tracking and TTL expiration.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Generation Cache ==
/// Bounded cache of top-level generation results.
///
/// Entries are evicted least-recently-used first once `max_entries` is reached,
/// and are dropped once older than the TTL.
#[derive(Debug)]
pub struct GenerationCache {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    stats: CacheStats,
    max_entries: usize,
    /// Entry lifetime in seconds, None = entries never expire
    ttl: Option<u64>,
}

impl GenerationCache {
    // == Constructor ==
    /// Creates a cache holding at most `max_entries` values for `ttl` seconds each.
    ///
    /// A `ttl` of 0 disables expiry.
    pub fn new(max_entries: usize, ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl: (ttl > 0).then_some(ttl),
        }
    }

    // == Get ==
    /// Looks up a value, refreshing its recency on a hit.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let expired = match self.entries.get_mut(key) {
            Some(entry) if !entry.is_expired() => {
                entry.touch();
                let value = entry.value.clone();
                self.lru.touch(key);
                self.stats.record_hit();
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Insert ==
    /// Stores a value, replacing any previous value under the same key.
    ///
    /// When full, the least recently used entry makes room. A zero-capacity
    /// cache stores nothing.
    pub fn insert(&mut self, key: String, value: Value) {
        if self.max_entries == 0 {
            return;
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!("Evicted least recently used cache entry");
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, self.ttl));
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Remove ==
    /// Removes an entry, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Drops every entry and returns how many were held. Counters are kept.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
        count
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        self.stats.set_total_entries(self.entries.len());
        expired_keys.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }
}
