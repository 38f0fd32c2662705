//! docstore - document storage with a read-through cache
//!
//! Documents (`id`, `tags`, free-form JSON `data`) are kept one file per id
//! in a collection directory and served over HTTP. Reads go through a
//! time-expiring in-memory cache; updates refresh cached entries, creates
//! never touch the cache.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, typed errors and the port traits
//! - **Adapters** (`adapters`): filesystem storage, the moka cache and the HTTP surface
//! - **Service Layer** (`services`): the read-through / write-invalidate policy
//! - **Infrastructure Layer** (`infrastructure`): configuration, logging and wiring
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use docstore::{ConfigLoader, Document};
//! use docstore::infrastructure::setup::build_document_service;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let service = build_document_service(&config).await?;
//!     service.persist(Document::new("invoice-1").with_tag("billing")).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DocumentError, RepositoryError, StorageError};
pub use domain::models::{CacheConfig, Config, Document, LoggingConfig, ServerConfig, StorageConfig};
pub use domain::ports::{DocumentCache, DocumentRepository, StorageProvider};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::DocumentService;
