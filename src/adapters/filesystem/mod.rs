//! File-system storage adapters.

pub mod document_repository;
pub mod provider;

pub use document_repository::{FileSystemDocumentRepository, DEFAULT_COLLECTION};
pub use provider::FileSystemProvider;
