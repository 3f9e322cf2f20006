//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache counters and configuration.
///
/// Hit, miss and eviction counters cover the whole process lifetime and are
/// not reset by clearing the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that returned a live entry
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries removed to make room for a new one
    pub evictions: u64,
    /// Entries currently held
    pub size: usize,
    /// Configured maximum number of entries; 0 disables caching
    pub capacity: usize,
    /// Configured time-to-live in seconds
    pub ttl_seconds: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates zeroed counters for a cache of the given configuration.
    pub fn new(capacity: usize, ttl_seconds: u64) -> Self {
        Self {
            capacity,
            ttl_seconds,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Utilization ==
    /// Occupied share of capacity in percent; 0.0 when caching is disabled.
    pub fn utilization_percent(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.size as f64 / self.capacity as f64 * 100.0
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new(100, 3600);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.size, 0);
        assert_eq!(stats.capacity, 100);
        assert_eq!(stats.ttl_seconds, 3600);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::new(10, 60).hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new(10, 60);
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_utilization() {
        let mut stats = CacheStats::new(4, 60);
        stats.set_size(1);
        assert_eq!(stats.utilization_percent(), 25.0);
    }

    #[test]
    fn test_utilization_disabled_cache() {
        assert_eq!(CacheStats::new(0, 60).utilization_percent(), 0.0);
    }

    #[test]
    fn test_record_eviction() {
        let mut stats = CacheStats::new(10, 60);
        stats.record_eviction();
        stats.record_eviction();
        assert_eq!(stats.evictions, 2);
    }
}
