//! Time-expiring document cache using moka.
//!
//! Entries stay readable for the configured window after their last `set`
//! (500s by default). There is no size bound unless one is configured.

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use crate::domain::models::{CacheConfig, Document};
use crate::domain::ports::DocumentCache;

/// Default expiry window for cached documents.
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(500);

#[derive(Debug)]
struct CacheEntry {
    document: Document,
    inserted_at: Instant,
}

/// Document cache keyed by document id.
pub struct InMemoryDocumentCache {
    entries: Cache<String, Arc<CacheEntry>>,
    expiration: Duration,
    clock: Arc<dyn Clock>,
}

impl InMemoryDocumentCache {
    /// Create an unbounded cache with the given expiry window.
    pub fn new(expiration: Duration) -> Self {
        Self::with_options(expiration, None, Arc::new(SystemClock))
    }

    /// Create a cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_options(
            Duration::from_secs(config.expiration_secs),
            config.max_capacity,
            Arc::new(SystemClock),
        )
    }

    /// Create with an explicit capacity bound and time source.
    pub fn with_options(
        expiration: Duration,
        max_capacity: Option<u64>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut builder = Cache::builder().time_to_live(expiration);
        if let Some(capacity) = max_capacity {
            builder = builder.max_capacity(capacity);
        }

        Self {
            entries: builder.build(),
            expiration,
            clock,
        }
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        self.clock.now().saturating_duration_since(entry.inserted_at) >= self.expiration
    }
}

impl Default for InMemoryDocumentCache {
    fn default() -> Self {
        Self::new(DEFAULT_EXPIRATION)
    }
}

#[async_trait]
impl DocumentCache for InMemoryDocumentCache {
    async fn get(&self, id: &str) -> Option<Document> {
        let entry = self.entries.get(id).await?;
        // Stale entries are left for moka's TTL to evict; removing here could
        // race with a concurrent set for the same id.
        if self.is_expired(&entry) {
            return None;
        }
        Some(entry.document.clone())
    }

    async fn set(&self, document: &Document) {
        let entry = CacheEntry {
            document: document.clone(),
            inserted_at: self.clock.now(),
        };
        self.entries
            .insert(document.id.clone(), Arc::new(entry))
            .await;
    }
}
