//! Cache Store Module
//!
//! Result cache combining HashMap storage with LRU tracking and lazy TTL expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::linalg::{CanonicalKey, ComputeResult};

// == Cache Store ==
/// Size- and time-bounded store of computed results keyed by canonical hash.
///
/// No operation fails: a disabled (zero capacity) cache simply misses on
/// every lookup.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<CanonicalKey, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker<CanonicalKey>,
    /// Lifetime counters
    stats: CacheStats,
    /// Maximum number of entries; 0 disables caching
    capacity: usize,
    /// Time-to-live measured from insertion
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and TTL in seconds.
    pub fn new(capacity: usize, ttl_seconds: u64) -> Self {
        Self::with_ttl(capacity, Duration::from_secs(ttl_seconds))
    }

    /// Creates a new CacheStore with a sub-second capable TTL.
    pub fn with_ttl(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(capacity, ttl.as_secs()),
            capacity,
            ttl,
        }
    }

    // == Get ==
    /// Looks up `key`, returning a shared handle to the cached result.
    ///
    /// A hit refreshes the entry's LRU position. An expired entry is removed
    /// and counted as a miss.
    pub fn get(&mut self, key: &CanonicalKey) -> Option<Arc<ComputeResult>> {
        self.get_at(key, Instant::now())
    }

    /// [`get`](Self::get) evaluated at an explicit instant.
    pub fn get_at(&mut self, key: &CanonicalKey, now: Instant) -> Option<Arc<ComputeResult>> {
        let ttl = self.ttl;
        let Some(entry) = self.entries.get_mut(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(ttl, now) {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.set_size(self.entries.len());
            self.stats.record_miss();
            debug!("Expired cache entry {} removed on lookup", key.short());
            return None;
        }

        entry.touch(now);
        let result = Arc::clone(&entry.result);
        self.lru.touch(key);
        self.stats.record_hit();
        Some(result)
    }

    // == Put ==
    /// Stores `result` under `key`.
    ///
    /// Replacing an existing key never evicts. Inserting a new key into a full
    /// cache first evicts the least recently used entry. With zero capacity this
    /// is a no-op.
    pub fn put(&mut self, key: CanonicalKey, result: Arc<ComputeResult>) {
        self.put_at(key, result, Instant::now());
    }

    /// [`put`](Self::put) evaluated at an explicit instant.
    pub fn put_at(&mut self, key: CanonicalKey, result: Arc<ComputeResult>, now: Instant) {
        if self.capacity == 0 {
            return;
        }

        let is_overwrite = self.entries.contains_key(&key);
        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!("Evicted least recently used entry {}", evicted.short());
            }
        }

        self.entries.insert(key, CacheEntry::new(result, now));
        self.lru.touch(&key);
        self.stats.set_size(self.entries.len());
    }

    // == Stats ==
    /// Returns a snapshot of the counters and configuration.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    // == Clear ==
    /// Removes every entry. Lifetime counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.stats.set_size(0);
    }

    // == Purge Expired ==
    /// Removes all expired entries, returning how many were removed.
    ///
    /// Not counted as evictions or misses.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    /// [`purge_expired`](Self::purge_expired) evaluated at an explicit instant.
    pub fn purge_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let expired: Vec<CanonicalKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(ttl, now))
            .map(|(key, _)| *key)
            .collect();

        for key in &expired {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.set_size(self.entries.len());
        expired.len()
    }

    pub fn contains(&self, key: &CanonicalKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
