use async_trait::async_trait;

use crate::domain::models::Document;

/// Time-expiring document cache keyed by document id.
///
/// All operations are total. Expired entries behave exactly like absent ones.
#[async_trait]
pub trait DocumentCache: Send + Sync {
    /// Get the cached document if present and not expired.
    async fn get(&self, id: &str) -> Option<Document>;

    /// Insert or replace the entry for `document.id`, restarting its expiry window.
    async fn set(&self, document: &Document);
}
