//! Cache Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::Cache;

/// Spawns a background task that sweeps stale entries out of `cache`.
///
/// The task sleeps for the cache interval between sweeps, so the same value
/// bounds both how often the sweep runs and how old an entry may get. Each
/// sweep holds the cache lock for its whole pass.
///
/// The loop exits as soon as `shutdown` is cancelled, including while it is
/// sleeping. Await the returned handle to know the task has stopped.
///
/// # Example
/// ```ignore
/// let cache = Cache::new(Duration::from_secs(5));
/// let shutdown = CancellationToken::new();
/// let handle = spawn_sweep_task(cache.clone(), shutdown.clone());
/// // Later, during shutdown:
/// shutdown.cancel();
/// handle.await?;
/// ```
pub fn spawn_sweep_task(cache: Cache, shutdown: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        let interval = cache.interval().await;
        info!("Starting cache sweep task with interval of {:?}", interval);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }

            let removed = cache.reap_expired().await;

            if removed > 0 {
                info!("Cache sweep: removed {} stale entries", removed);
            } else {
                debug!("Cache sweep: no stale entries found");
            }
        }

        info!("Cache sweep task stopped");
    })
}
