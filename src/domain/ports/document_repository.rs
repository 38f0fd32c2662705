use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::models::Document;

/// Repository trait for durable document storage
///
/// The repository is the source of truth for documents. It enforces the
/// existence preconditions of create and update; it does not lock an id
/// across the check and the write.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Store a new document
    ///
    /// # Errors
    /// Returns error if:
    /// - A document with the same id already exists (`AlreadyExists`)
    /// - The storage write fails (`Storage`)
    async fn persist(&self, document: &Document) -> RepositoryResult<()>;

    /// Replace an existing document entirely
    ///
    /// # Errors
    /// Returns error if:
    /// - No document with this id exists (`NotFound`)
    /// - The storage write fails (`Storage`)
    async fn update(&self, document: &Document) -> RepositoryResult<()>;

    /// Get a document by id
    ///
    /// Returns `None` if no document is stored under `id`. A stored record
    /// that cannot be decoded is an error, not `None`.
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Document>>;
}
