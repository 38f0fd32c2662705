//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use docstore::adapters::cache::{InMemoryDocumentCache, ManualClock};
use docstore::adapters::filesystem::{
    FileSystemDocumentRepository, FileSystemProvider, DEFAULT_COLLECTION,
};
use docstore::domain::errors::RepositoryResult;
use docstore::domain::models::Document;
use docstore::domain::ports::DocumentRepository;
use docstore::services::DocumentService;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Repository wrapper counting the calls that reach storage.
#[allow(dead_code)]
pub struct CountingRepository {
    inner: FileSystemDocumentRepository,
    gets: AtomicUsize,
}

#[allow(dead_code)]
impl CountingRepository {
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentRepository for CountingRepository {
    async fn persist(&self, document: &Document) -> RepositoryResult<()> {
        self.inner.persist(document).await
    }

    async fn update(&self, document: &Document) -> RepositoryResult<()> {
        self.inner.update(document).await
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Document>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id).await
    }
}

/// A service over real file storage in a temp dir, with a manual cache clock.
#[allow(dead_code)]
pub struct Harness {
    pub dir: TempDir,
    pub repository: Arc<CountingRepository>,
    pub clock: Arc<ManualClock>,
    pub service: DocumentService,
}

#[allow(dead_code)]
impl Harness {
    pub async fn new() -> Self {
        let dir = temp_dir();
        let provider = Arc::new(FileSystemProvider::new(dir.path()));
        let inner = FileSystemDocumentRepository::open(provider, DEFAULT_COLLECTION)
            .await
            .expect("open repository");
        let repository = Arc::new(CountingRepository {
            inner,
            gets: AtomicUsize::new(0),
        });
        let clock = Arc::new(ManualClock::new());
        let cache = InMemoryDocumentCache::with_options(
            Duration::from_secs(500),
            None,
            clock.clone(),
        );
        let service = DocumentService::new(repository.clone(), Arc::new(cache));

        Self {
            dir,
            repository,
            clock,
            service,
        }
    }

    /// Path of the file backing `id`.
    pub fn document_path(&self, id: &str) -> std::path::PathBuf {
        self.dir.path().join(DEFAULT_COLLECTION).join(id)
    }
}
