//! TTL snapshot cache for the author set.
//!
//! Holds one process-wide snapshot of all authors. Readers that can tolerate
//! staleness up to the TTL go through `get`; writers call `invalidate` after
//! every successful insert so the next `list` re-reads the store. Time is
//! measured against the tokio clock, so tests drive expiry with a paused
//! runtime instead of sleeping.

use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::models::Author;

struct CacheEntry {
    cached_at: Instant,
    authors: Vec<Author>,
}

pub struct AuthorCache {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl AuthorCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Snapshot of the cached author set, or `None` on miss or expiry.
    pub async fn get(&self) -> Option<Vec<Author>> {
        let guard = self.entry.read().await;
        match guard.as_ref() {
            Some(entry) if entry.cached_at.elapsed() < self.ttl => {
                debug!(authors = entry.authors.len(), "author cache hit");
                Some(entry.authors.clone())
            }
            Some(_) => {
                debug!("author cache expired");
                None
            }
            None => {
                debug!("author cache miss");
                None
            }
        }
    }

    /// Replace the snapshot and restart the TTL window.
    pub async fn put(&self, authors: Vec<Author>) {
        let mut guard = self.entry.write().await;
        *guard = Some(CacheEntry {
            cached_at: Instant::now(),
            authors,
        });
    }

    /// Drop the snapshot so the next read goes to the store.
    pub async fn invalidate(&self) {
        let mut guard = self.entry.write().await;
        if guard.take().is_some() {
            debug!("author cache invalidated");
        }
    }
}
