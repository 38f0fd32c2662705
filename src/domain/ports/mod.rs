//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that adapters must implement:
//! - StorageProvider: raw payload storage addressed by (collection, id)
//! - DocumentRepository: create/update/read of documents with existence rules
//! - DocumentCache: time-expiring id-keyed document cache
//!
//! The document service depends only on these traits.

pub mod document_cache;
pub mod document_repository;
pub mod storage_provider;

pub use document_cache::DocumentCache;
pub use document_repository::DocumentRepository;
pub use storage_provider::StorageProvider;
