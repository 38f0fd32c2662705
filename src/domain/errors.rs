//! Error types for the storage, repository and service layers.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a storage provider.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage name: {0}")]
    InvalidName(String),

    #[error("Blocking storage task failed: {0}")]
    TaskJoin(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by a document repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Document with id ({0}) already exists")]
    AlreadyExists(String),

    #[error("Document with id ({0}) does not exist")]
    NotFound(String),

    #[error("Storage failure for document ({id})")]
    Storage {
        id: String,
        #[source]
        source: StorageError,
    },

    #[error("Cannot open collection ({collection})")]
    Collection {
        collection: String,
        #[source]
        source: StorageError,
    },

    #[error("Serialization failure for document ({id})")]
    Serialization {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Service operation an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Persist,
    Update,
    Get,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Persist => "persist",
            Self::Update => "update",
            Self::Get => "get",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} document", self.as_str())
    }
}

/// Which existence precondition a conflicting request violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Create for an id that is already stored.
    AlreadyExists,
    /// Update for an id that is not stored.
    Missing,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists => f.write_str("already exists"),
            Self::Missing => f.write_str("does not exist"),
        }
    }
}

/// Domain-level errors returned by the document service.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("{operation} has failed. Document with id ({id}) {kind}")]
    Conflict {
        operation: Operation,
        id: String,
        kind: ConflictKind,
    },

    #[error("{operation} has failed for document ({id})")]
    Internal {
        operation: Operation,
        id: String,
        #[source]
        source: RepositoryError,
    },
}

impl DocumentError {
    /// True for errors caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidDocument(_) | Self::Conflict { .. })
    }
}

pub type DocumentResult<T> = Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_conflict_message_names_id() {
        let err = DocumentError::Conflict {
            operation: Operation::Persist,
            id: "a".to_string(),
            kind: ConflictKind::AlreadyExists,
        };
        assert_eq!(
            err.to_string(),
            "persist document has failed. Document with id (a) already exists"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_internal_preserves_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DocumentError::Internal {
            operation: Operation::Update,
            id: "a".to_string(),
            source: RepositoryError::Storage {
                id: "a".to_string(),
                source: StorageError::Io {
                    path: PathBuf::from("DocumentStorage/a"),
                    source: io,
                },
            },
        };

        assert!(!err.is_client_error());
        let repo = err.source().expect("repository cause");
        let storage = repo.source().expect("storage cause");
        assert!(storage.to_string().contains("denied"));
    }
}
