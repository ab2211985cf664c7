//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries. Lazy
//! expiry on read only reclaims keys that get read again; the sweep reclaims
//! the ones that don't.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically sweeps expired entries from a cache.
///
/// The task runs in an infinite loop, sleeping for the configured interval
/// between passes. Each pass acquires the write lock, so it serializes with
/// concurrent `get`/`set` calls and never races a deletion into an iteration.
///
/// # Arguments
/// * `cache` - Shared reference to the cache to sweep
/// * `label` - Cache name used in log lines (one sweep task per cache)
/// * `sweep_interval_secs` - Interval in seconds between passes; clamped to
///   at least one second so a zero interval can't busy-loop on the write lock
///
/// # Returns
/// A JoinHandle for the spawned task. The process entry point aborts it
/// during graceful shutdown so no recurring work dangles after teardown.
pub fn spawn_sweep_task<T>(
    cache: Arc<RwLock<TtlCache<T>>>,
    label: &'static str,
    sweep_interval_secs: u64,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting {} cache sweep task with interval of {} seconds",
            label, sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            // Acquire write lock and drop expired entries
            let (removed, remaining) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.sweep_expired();
                (removed, cache_guard.len())
            };

            if removed > 0 {
                info!(
                    "{} cache sweep: removed {} expired entries, {} remaining",
                    label, removed, remaining
                );
            } else {
                debug!("{} cache sweep: no expired entries found", label);
            }
        }
    })
}
