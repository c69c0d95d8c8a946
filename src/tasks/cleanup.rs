//! TTL Cleanup Task
//!
//! Background task that periodically drops expired generation results.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::GenerationCache;

/// Spawns a background task that periodically removes expired cache entries.
///
/// The task sleeps for `cleanup_interval_secs` between runs and holds the
/// cache write lock only while sweeping.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(GenerationCache::new(500, 300)));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 30);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<GenerationCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired results", removed);
            } else {
                debug!("TTL cleanup: no expired results found");
            }
        }
    })
}
