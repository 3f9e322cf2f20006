//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::linalg::ComputeResult;

// == Cache Entry ==
/// A cached computation with its insertion and last-access times.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored result, shared with every caller that reads it
    pub result: Arc<ComputeResult>,
    /// When the entry was inserted; TTL counts from here
    pub inserted_at: Instant,
    /// When the entry was last returned by a lookup
    pub last_accessed: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry inserted (and last accessed) at `now`.
    pub fn new(result: Arc<ComputeResult>, now: Instant) -> Self {
        Self {
            result,
            inserted_at: now,
            last_accessed: now,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired once `now - inserted_at >= ttl`,
    /// so it is already stale at the exact instant the TTL elapses.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) >= ttl
    }

    // == Time To Live ==
    /// Remaining lifetime at `now`; zero once expired.
    pub fn ttl_remaining(&self, ttl: Duration, now: Instant) -> Duration {
        ttl.saturating_sub(now.saturating_duration_since(self.inserted_at))
    }

    // == Touch ==
    /// Records an access at `now`.
    pub fn touch(&mut self, now: Instant) {
        self.last_accessed = now;
    }
}
