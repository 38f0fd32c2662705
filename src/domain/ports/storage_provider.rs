use async_trait::async_trait;

use crate::domain::errors::StorageResult;

/// Durable medium for raw document payloads.
///
/// Payloads are addressed by a collection name and an id. Implementations
/// must make `write` atomic from a concurrent reader's point of view: a
/// `read` observes either the previous payload or the new one, never a
/// partially written one.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Create the collection if it does not exist yet.
    async fn ensure_collection(&self, collection: &str) -> StorageResult<()>;

    /// Check whether a payload is stored under `id`.
    async fn exists(&self, collection: &str, id: &str) -> StorageResult<bool>;

    /// Store `content` under `id`, replacing any previous payload.
    async fn write(&self, collection: &str, id: &str, content: &[u8]) -> StorageResult<()>;

    /// Read the payload stored under `id`.
    ///
    /// # Errors
    /// Returns error if:
    /// - No payload exists for `id`
    /// - The underlying medium fails
    async fn read(&self, collection: &str, id: &str) -> StorageResult<Vec<u8>>;
}
