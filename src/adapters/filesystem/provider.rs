//! Local filesystem storage provider.
//!
//! Each collection is a directory under the provider root and each payload a
//! file named after its id. Writes go to a uniquely named temp file in the
//! same directory which is then renamed over the target, so readers see
//! either the old payload or the new one.

use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::ports::StorageProvider;

const TEMP_PREFIX: &str = ".docstore-";
const TEMP_SUFFIX: &str = ".tmp";

/// Local filesystem storage provider
#[derive(Debug, Clone)]
pub struct FileSystemProvider {
    root: PathBuf,
}

impl FileSystemProvider {
    /// Create a provider rooted at `root`. Nothing is created on disk yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collection_path(&self, collection: &str) -> StorageResult<PathBuf> {
        check_name(collection)?;
        Ok(self.root.join(collection))
    }

    fn entry_path(&self, collection: &str, id: &str) -> StorageResult<PathBuf> {
        check_name(id)?;
        Ok(self.collection_path(collection)?.join(id))
    }
}

/// Reject names that would escape the collection directory.
fn check_name(name: &str) -> StorageResult<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `content` to `path` through a temp file and an atomic rename.
fn write_atomic(path: &Path, content: &[u8]) -> StorageResult<()> {
    let parent = path
        .parent()
        .ok_or_else(|| StorageError::InvalidName(path.display().to_string()))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(parent)
        .map_err(io_error(parent))?;

    tmp.write_all(content).map_err(io_error(tmp.path()))?;
    tmp.as_file().sync_all().map_err(io_error(tmp.path()))?;

    // persist() renames over the target and disarms delete-on-drop
    tmp.persist(path).map_err(|e| StorageError::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[async_trait]
impl StorageProvider for FileSystemProvider {
    async fn ensure_collection(&self, collection: &str) -> StorageResult<()> {
        let path = self.collection_path(collection)?;
        tokio::fs::create_dir_all(&path)
            .await
            .map_err(io_error(&path))
    }

    async fn exists(&self, collection: &str, id: &str) -> StorageResult<bool> {
        let path = self.entry_path(collection, id)?;
        tokio::fs::try_exists(&path).await.map_err(io_error(&path))
    }

    async fn write(&self, collection: &str, id: &str, content: &[u8]) -> StorageResult<()> {
        let path = self.entry_path(collection, id)?;
        let content = content.to_vec();

        tokio::task::spawn_blocking(move || write_atomic(&path, &content))
            .await
            .map_err(|e| StorageError::TaskJoin(e.to_string()))?
    }

    async fn read(&self, collection: &str, id: &str) -> StorageResult<Vec<u8>> {
        let path = self.entry_path(collection, id)?;
        tokio::fs::read(&path).await.map_err(io_error(&path))
    }
}
