//! Document service coordinating the repository and the read cache.
//!
//! The repository is authoritative. The cache is filled by reads, refreshed
//! by updates of ids it already holds, and never touched by creates.
//! Repository errors are translated into [`DocumentError`] here.

use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::domain::errors::{
    ConflictKind, DocumentError, DocumentResult, Operation, RepositoryError,
};
use crate::domain::models::{validate_id, Document};
use crate::domain::ports::{DocumentCache, DocumentRepository};

/// Service for creating, updating and reading documents.
///
/// Stateless between calls; cheap to share behind an `Arc`.
pub struct DocumentService {
    repository: Arc<dyn DocumentRepository>,
    cache: Arc<dyn DocumentCache>,
}

impl DocumentService {
    pub fn new(repository: Arc<dyn DocumentRepository>, cache: Arc<dyn DocumentCache>) -> Self {
        Self { repository, cache }
    }

    /// Store a new document.
    ///
    /// The cache is not populated; only reads and updates fill it.
    ///
    /// # Errors
    /// - `InvalidDocument` if the id cannot be used as a storage key
    /// - `Conflict` if a document with this id already exists
    /// - `Internal` if the repository fails
    #[instrument(skip(self, document), fields(document_id = %document.id))]
    pub async fn persist(&self, document: Document) -> DocumentResult<()> {
        document.validate().map_err(DocumentError::InvalidDocument)?;

        self.repository
            .persist(&document)
            .await
            .map_err(|e| translate(Operation::Persist, &document.id, e))
    }

    /// Replace an existing document.
    ///
    /// If the id is currently cached the entry is refreshed with the new
    /// value; otherwise the cache is left alone.
    ///
    /// # Errors
    /// - `InvalidDocument` if the id cannot be used as a storage key
    /// - `Conflict` if no document with this id exists
    /// - `Internal` if the repository fails
    #[instrument(skip(self, document), fields(document_id = %document.id))]
    pub async fn update(&self, document: Document) -> DocumentResult<()> {
        document.validate().map_err(DocumentError::InvalidDocument)?;

        self.repository
            .update(&document)
            .await
            .map_err(|e| translate(Operation::Update, &document.id, e))?;

        if self.cache.get(&document.id).await.is_some() {
            debug!("refreshing cached document");
            self.cache.set(&document).await;
        }
        Ok(())
    }

    /// Get a document, reading through the cache.
    ///
    /// A cache hit is returned without consulting the repository. On a miss
    /// the repository result is cached before being returned. `Ok(None)`
    /// means no such document.
    #[instrument(skip(self))]
    pub async fn get_document(&self, id: &str) -> DocumentResult<Option<Document>> {
        validate_id(id).map_err(DocumentError::InvalidDocument)?;

        if let Some(document) = self.cache.get(id).await {
            debug!("cache hit");
            return Ok(Some(document));
        }

        let document = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| translate(Operation::Get, id, e))?;

        if let Some(ref document) = document {
            self.cache.set(document).await;
        }
        Ok(document)
    }
}

/// Map a repository error to its domain-level meaning.
fn translate(operation: Operation, id: &str, err: RepositoryError) -> DocumentError {
    let kind = match (&err, operation) {
        (RepositoryError::AlreadyExists(_), Operation::Persist) => Some(ConflictKind::AlreadyExists),
        (RepositoryError::NotFound(_), Operation::Update) => Some(ConflictKind::Missing),
        _ => None,
    };

    match kind {
        Some(kind) => {
            debug!(error = %err, "{operation} conflict");
            DocumentError::Conflict {
                operation,
                id: id.to_string(),
                kind,
            }
        }
        None => {
            error!(error = %err, cause = ?std::error::Error::source(&err), "{operation} has failed");
            DocumentError::Internal {
                operation,
                id: id.to_string(),
                source: err,
            }
        }
    }
}
