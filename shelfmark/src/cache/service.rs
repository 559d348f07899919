//! TTL cache with fetch deduplication and failure fallback.

use super::snapshot::Snapshot;
use crate::feed::{AsyncHttpClient, FeedSource};
use crate::mapping::MappingIndex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default snapshot lifetime.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// TTL cache wrapping a [`FeedSource`].
///
/// State machine: Empty --fetch ok--> Fresh --TTL elapses--> Stale
/// --fetch ok--> Fresh; a failed fetch keeps the stale snapshot serving
/// (its lifetime effectively extended), and from Empty a failed fetch stays
/// Empty until the next call retries.
///
/// Concurrent callers that find the snapshot stale queue on one refresh
/// lock and re-check freshness after acquiring it, so at most one fetch is
/// ever in flight no matter how many callers triggered the refresh.
pub struct MappingCache<C: AsyncHttpClient> {
    source: FeedSource<C>,
    ttl: Duration,
    snapshot: Mutex<Option<Arc<Snapshot>>>,
    force_stale: AtomicBool,
    refresh_lock: tokio::sync::Mutex<()>,
}

impl<C: AsyncHttpClient> MappingCache<C> {
    pub fn new(source: FeedSource<C>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: Mutex::new(None),
            force_stale: AtomicBool::new(false),
            refresh_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Returns the current mapping index, refreshing from the feed first if
    /// the snapshot is stale or absent.
    ///
    /// Never fails: a fetch or parse failure falls back to the previous
    /// snapshot, or to an empty index when none exists yet.
    pub async fn index(&self) -> Arc<MappingIndex> {
        if let Some(snapshot) = self.fresh_snapshot() {
            debug!("serving cached mapping index");
            return Arc::clone(&snapshot.index);
        }

        let _refresh = self.refresh_lock.lock().await;
        // Another caller may have refreshed while this one waited.
        if let Some(snapshot) = self.fresh_snapshot() {
            return Arc::clone(&snapshot.index);
        }

        match self.source.fetch_records().await {
            Ok((records, stats)) => {
                let index = Arc::new(MappingIndex::build(records));
                let snapshot = Arc::new(Snapshot {
                    index: Arc::clone(&index),
                    stats,
                    fetched_at: Instant::now(),
                });
                *self.snapshot.lock().unwrap() = Some(snapshot);
                self.force_stale.store(false, Ordering::Release);
                index
            }
            Err(e) => {
                let previous = self.snapshot.lock().unwrap().clone();
                match previous {
                    Some(snapshot) => {
                        warn!(error = %e, "feed refresh failed, serving previous snapshot");
                        Arc::clone(&snapshot.index)
                    }
                    None => {
                        warn!(error = %e, "feed refresh failed with no prior snapshot, serving empty mapping set");
                        Arc::new(MappingIndex::default())
                    }
                }
            }
        }
    }

    /// Marks the snapshot stale so the next [`index`](Self::index) call
    /// fetches regardless of TTL. The old snapshot remains the fallback if
    /// that fetch fails.
    pub fn invalidate(&self) {
        self.force_stale.store(true, Ordering::Release);
    }

    /// The snapshot currently held, fresh or stale.
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.lock().unwrap().clone()
    }

    fn fresh_snapshot(&self) -> Option<Arc<Snapshot>> {
        if self.force_stale.load(Ordering::Acquire) {
            return None;
        }
        self.snapshot
            .lock()
            .unwrap()
            .as_ref()
            .filter(|s| s.fetched_at.elapsed() < self.ttl)
            .cloned()
    }
}
