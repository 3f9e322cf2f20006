//! TTL Cleanup Task
//!
//! Background task that periodically drops expired cache entries so stale
//! results do not sit in memory until their key is looked up again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::service::ComputeService;

/// Spawns a background task that periodically purges expired cache entries.
///
/// Lookups already treat expired entries as misses; this sweep only reclaims
/// memory held by entries nobody asks for anymore.
///
/// # Arguments
/// * `service` - The compute service whose cache is swept
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be aborted during graceful
/// shutdown.
pub fn spawn_cleanup_task(service: ComputeService, cleanup_interval_secs: u64) -> JoinHandle<()> {
    spawn_cleanup_every(service, Duration::from_secs(cleanup_interval_secs))
}

pub(crate) fn spawn_cleanup_every(service: ComputeService, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = service.purge_expired();
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
