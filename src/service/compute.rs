//! Compute Service
//!
//! Canonicalize, consult the cache, compute on a miss, store, return.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;
use crate::error::Result;
use crate::linalg::{analyze, Canonicalizer, ComputeResult};

// == Cache Status ==
/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn is_hit(self) -> bool {
        self == CacheStatus::Hit
    }
}

// == Compute Service ==
/// Single entry point for subspace computations.
///
/// Holds the cache behind one mutex that is only taken for the lookup and the
/// insert; the reduction itself runs unlocked. Two concurrent misses on the
/// same matrix may both compute and both insert; the results are equal.
#[derive(Debug, Clone)]
pub struct ComputeService {
    canonicalizer: Canonicalizer,
    cache: Arc<Mutex<CacheStore>>,
}

impl ComputeService {
    /// Creates a service around an existing cache store.
    pub fn new(canonicalizer: Canonicalizer, cache: CacheStore) -> Self {
        Self {
            canonicalizer,
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a service configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Canonicalizer::new(config.max_dimension),
            CacheStore::new(config.cache_size, config.cache_ttl),
        )
    }

    // == Compute ==
    /// Computes the four fundamental subspaces of `raw`.
    pub fn compute(&self, raw: &[Vec<Value>]) -> Result<Arc<ComputeResult>> {
        self.compute_with_status(raw).map(|(result, _)| result)
    }

    /// Like [`compute`](Self::compute), also reporting whether the cache answered.
    pub fn compute_with_status(
        &self,
        raw: &[Vec<Value>],
    ) -> Result<(Arc<ComputeResult>, CacheStatus)> {
        let (matrix, key) = self.canonicalizer.canonicalize(raw)?;

        if let Some(result) = self.lock_cache().get(&key) {
            debug!("Cache hit for matrix hash: {}...", key.short());
            return Ok((result, CacheStatus::Hit));
        }
        debug!("Cache miss - computing matrix hash: {}...", key.short());

        let start = Instant::now();
        let result = analyze(&matrix);
        if let Err(e) = result.verify() {
            error!(
                "Computation for matrix hash {} failed its own checks: {}",
                key.short(),
                e
            );
            return Err(e);
        }
        info!(
            "Computed {}x{} matrix of rank {} in {:?}",
            result.rows(),
            result.cols(),
            result.rank(),
            start.elapsed()
        );

        let result = Arc::new(result);
        self.lock_cache().put(key, Arc::clone(&result));
        Ok((result, CacheStatus::Miss))
    }

    // == Administration ==
    /// Snapshot of cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.lock_cache().stats()
    }

    /// Empties the cache; lifetime counters are kept.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// Removes expired entries, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.lock_cache().purge_expired()
    }

    pub fn canonicalizer(&self) -> &Canonicalizer {
        &self.canonicalizer
    }

    /// Every cache method leaves the store consistent before it can panic, so
    /// a poisoned lock is still safe to use.
    fn lock_cache(&self) -> MutexGuard<'_, CacheStore> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
