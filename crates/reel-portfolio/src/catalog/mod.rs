//! Cached video catalog with static fallback
//!
//! The catalog pulls rows from a [`RowSource`], normalizes them and keeps the
//! result for a short TTL. Whenever the source fails or produces no usable
//! rows the bundled dataset is served in full instead; the two are never
//! merged.

use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::models::Video;
use crate::normalizer::normalize;
use crate::sources::{RowSource, fallback};

pub mod shuffle;

pub use shuffle::shuffle;

/// Label of the pseudo-category that disables filtering
pub const ALL_CATEGORY: &str = "All";

/// Where the current catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    Remote,
    Fallback,
}

/// Immutable view of one catalog load
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub videos: Arc<Vec<Video>>,
    pub origin: CatalogOrigin,
}

impl CatalogSnapshot {
    /// First video attributed to `client`, in canonical order
    pub fn featured(&self, client: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.is_from_client(client))
    }

    pub fn find(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// `"All"` followed by every distinct tag, sorted
    pub fn categories(&self) -> Vec<String> {
        let tags: BTreeSet<&str> = self
            .videos
            .iter()
            .flat_map(|v| v.tags.iter().map(String::as_str))
            .collect();

        std::iter::once(ALL_CATEGORY)
            .chain(tags.into_iter().filter(|t| *t != ALL_CATEGORY))
            .map(str::to_string)
            .collect()
    }

    /// Videos carrying `tag`; `"All"` selects everything
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Video> {
        if tag == ALL_CATEGORY {
            return self.videos.to_vec();
        }
        self.videos.iter().filter(|v| v.has_tag(tag)).cloned().collect()
    }
}

struct CachedCatalog {
    snapshot: CatalogSnapshot,
    loaded_at: Instant,
}

pub struct VideoCatalog {
    source: Arc<dyn RowSource>,
    ttl: Duration,
    cache: RwLock<Option<CachedCatalog>>,
    /// Held by the one task currently fetching from the source
    refresh: Mutex<()>,
}

impl VideoCatalog {
    pub fn new(source: Arc<dyn RowSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cache: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// Current catalog, reloading when the cached one is older than the TTL
    ///
    /// Only one reload runs at a time. While it is in flight other callers get
    /// the expired snapshot, or wait for the reload when nothing is cached yet.
    pub async fn load(&self) -> CatalogSnapshot {
        let stale = {
            let cache = self.cache.read().await;
            match cache.as_ref() {
                Some(cached) if cached.loaded_at.elapsed() < self.ttl => {
                    return cached.snapshot.clone();
                }
                cached => cached.map(|cached| cached.snapshot.clone()),
            }
        };

        let _refresh = match (self.refresh.try_lock(), stale) {
            (Ok(guard), _) => guard,
            (Err(_), Some(stale)) => {
                debug!("Catalog refresh in progress, serving cached videos");
                return stale;
            }
            (Err(_), None) => self.refresh.lock().await,
        };

        // Another request may have refreshed while we waited for the lock
        if let Some(snapshot) = self.fresh_snapshot().await {
            return snapshot;
        }

        let snapshot = self.fetch().await;
        *self.cache.write().await = Some(CachedCatalog {
            snapshot: snapshot.clone(),
            loaded_at: Instant::now(),
        });
        snapshot
    }

    /// Drop the cached catalog so the next load hits the source
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    async fn fresh_snapshot(&self) -> Option<CatalogSnapshot> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|cached| cached.loaded_at.elapsed() < self.ttl)
            .map(|cached| cached.snapshot.clone())
    }

    async fn fetch(&self) -> CatalogSnapshot {
        let source_type = self.source.source_type();

        let videos = match self.source.fetch_rows().await {
            Ok(rows) => normalize(&rows),
            Err(e) => {
                warn!("Failed to fetch rows from {}: {}", source_type, e);
                Vec::new()
            }
        };

        if videos.is_empty() {
            let videos = fallback::static_videos();
            info!("Serving {} videos from the static fallback dataset", videos.len());
            return CatalogSnapshot {
                videos: Arc::new(videos),
                origin: CatalogOrigin::Fallback,
            };
        }

        debug!("Loaded {} videos from {}", videos.len(), source_type);
        CatalogSnapshot {
            videos: Arc::new(videos),
            origin: CatalogOrigin::Remote,
        }
    }
}
