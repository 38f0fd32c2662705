//! docstore setup and wiring
//!
//! Handles project initialization:
//! - Configuration directory creation
//! - Default config file creation
//! - Storage collection directory creation
//!
//! and builds the document service graph from a loaded [`Config`].

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::adapters::cache::InMemoryDocumentCache;
use crate::adapters::filesystem::{FileSystemDocumentRepository, FileSystemProvider};
use crate::domain::models::config::Config;
use crate::infrastructure::config::PROJECT_CONFIG_DIR;
use crate::services::DocumentService;

/// Default configuration template content
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# docstore configuration
# Override settings by editing this file, adding .docstore/local.yaml,
# or setting environment variables with the DOCSTORE_ prefix
#
# Example environment variables:
#   export DOCSTORE_SERVER__PORT=9090
#   export DOCSTORE_CACHE__EXPIRATION_SECS=60
#   export DOCSTORE_LOGGING__LEVEL=debug

# HTTP server
server:
  host: "127.0.0.1"
  port: 8080
  # Add a permissive CORS layer
  enable_cors: false

# Document storage
storage:
  # Directory the collection directory is created under
  root: "."
  # One file per document inside this directory
  collection: "DocumentStorage"

# Read cache
cache:
  # Seconds a cached document stays readable after it was last set
  expiration_secs: 500
  # Optional entry bound (unbounded when omitted)
  # max_capacity: 10000

# Logging configuration
logging:
  # Log level: trace, debug, info, warn, error
  level: "info"

  # Console format: json, pretty
  format: "json"

  # Directory for rolling JSON log files (console only when omitted)
  # log_dir: ".docstore/logs"

  # File rotation: daily, hourly, never
  rotation: "daily"
"#;

/// Setup paths and directories
#[derive(Debug, Clone)]
pub struct SetupPaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub storage_dir: PathBuf,
}

impl SetupPaths {
    /// Paths for a project rooted at `root`, storing documents in the default layout.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config_dir = root.join(PROJECT_CONFIG_DIR);
        let storage = Config::default().storage;

        Self {
            config_file: config_dir.join("config.yaml"),
            storage_dir: root.join(&storage.root).join(&storage.collection),
            config_dir,
            root,
        }
    }

    /// Check if the project is already initialized
    pub fn is_initialized(&self) -> bool {
        self.config_file.exists()
    }
}

/// Create the configuration directory
pub fn create_config_dir(paths: &SetupPaths) -> Result<bool> {
    create_dir(&paths.config_dir)
}

/// Create the default configuration file
pub fn create_config_file(paths: &SetupPaths, force: bool) -> Result<bool> {
    if paths.config_file.exists() && !force {
        return Ok(false);
    }

    fs::write(&paths.config_file, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", paths.config_file.display()))?;

    Ok(true)
}

/// Create the storage collection directory
pub fn create_storage_dir(paths: &SetupPaths) -> Result<bool> {
    create_dir(&paths.storage_dir)
}

fn create_dir(dir: &Path) -> Result<bool> {
    if dir.exists() {
        return Ok(false);
    }
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(true)
}

/// Wire provider, repository, cache and service from configuration.
pub async fn build_document_service(config: &Config) -> Result<Arc<DocumentService>> {
    let provider = Arc::new(FileSystemProvider::new(config.storage.root.clone()));
    let repository = FileSystemDocumentRepository::open(provider, &config.storage.collection)
        .await
        .with_context(|| {
            format!(
                "Failed to open document storage at {}",
                config.storage.root.join(&config.storage.collection).display()
            )
        })?;
    let cache = InMemoryDocumentCache::from_config(&config.cache);

    info!(
        root = %config.storage.root.display(),
        collection = %config.storage.collection,
        expiration_secs = config.cache.expiration_secs,
        "document service ready"
    );

    Ok(Arc::new(DocumentService::new(
        Arc::new(repository),
        Arc::new(cache),
    )))
}
