//! Document repository backed by a [`StorageProvider`].
//!
//! Documents are stored as compact JSON, one payload per id, inside a single
//! collection. Every operation performs exactly one existence check followed
//! by at most one write or read.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::models::Document;
use crate::domain::ports::{DocumentRepository, StorageProvider};

/// Default collection name documents are stored under.
pub const DEFAULT_COLLECTION: &str = "DocumentStorage";

pub struct FileSystemDocumentRepository {
    provider: Arc<dyn StorageProvider>,
    collection: String,
}

impl FileSystemDocumentRepository {
    /// Open the repository, creating its collection if needed.
    pub async fn open(
        provider: Arc<dyn StorageProvider>,
        collection: impl Into<String>,
    ) -> RepositoryResult<Self> {
        let collection = collection.into();
        provider
            .ensure_collection(&collection)
            .await
            .map_err(|source| RepositoryError::Collection {
                collection: collection.clone(),
                source,
            })?;

        Ok(Self {
            provider,
            collection,
        })
    }

    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        self.provider
            .exists(&self.collection, id)
            .await
            .map_err(|source| RepositoryError::Storage {
                id: id.to_string(),
                source,
            })
    }

    async fn write(&self, document: &Document) -> RepositoryResult<()> {
        let content =
            serde_json::to_vec(document).map_err(|source| RepositoryError::Serialization {
                id: document.id.clone(),
                source,
            })?;

        self.provider
            .write(&self.collection, &document.id, &content)
            .await
            .map_err(|source| RepositoryError::Storage {
                id: document.id.clone(),
                source,
            })
    }
}

#[async_trait]
impl DocumentRepository for FileSystemDocumentRepository {
    async fn persist(&self, document: &Document) -> RepositoryResult<()> {
        if self.exists(&document.id).await? {
            debug!(document_id = %document.id, "persist rejected, document exists");
            return Err(RepositoryError::AlreadyExists(document.id.clone()));
        }

        self.write(document).await.inspect_err(|e| {
            debug!(document_id = %document.id, error = %e, "persist write failed");
        })
    }

    async fn update(&self, document: &Document) -> RepositoryResult<()> {
        if !self.exists(&document.id).await? {
            debug!(document_id = %document.id, "update rejected, document does not exist");
            return Err(RepositoryError::NotFound(document.id.clone()));
        }

        self.write(document).await.inspect_err(|e| {
            debug!(document_id = %document.id, error = %e, "update write failed");
        })
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Document>> {
        if !self.exists(id).await? {
            debug!(document_id = %id, "document does not exist");
            return Ok(None);
        }

        let content = self
            .provider
            .read(&self.collection, id)
            .await
            .map_err(|source| RepositoryError::Storage {
                id: id.to_string(),
                source,
            })?;

        let document =
            serde_json::from_slice(&content).map_err(|source| RepositoryError::Serialization {
                id: id.to_string(),
                source,
            })?;
        Ok(Some(document))
    }
}
