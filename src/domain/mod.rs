//! Domain layer for docstore
//!
//! This module contains the document model, configuration model, error
//! taxonomy and the port traits adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{
    ConflictKind, DocumentError, DocumentResult, Operation, RepositoryError, RepositoryResult,
    StorageError, StorageResult,
};
