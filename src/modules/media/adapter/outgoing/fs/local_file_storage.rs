use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::media::application::domain::entities::StorageLocation;
use crate::media::application::ports::outgoing::{FileStorage, FileStorageError, StoredObject};

// ============================================================================
// Storage Implementation (Production)
// ============================================================================

/// Content store backed by a directory on the local filesystem.
///
/// Objects are keyed by a generated UUID, so locations never contain
/// user-controlled path segments. Deletion still refuses anything that is
/// not a bare file name, since locations come back from the database.
#[derive(Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, location: &StorageLocation) -> Result<PathBuf, FileStorageError> {
        let key = location.as_str();

        let is_bare_name = Path::new(key)
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n == key)
            .unwrap_or(false);

        if !is_bare_name {
            return Err(FileStorageError::Io(format!(
                "invalid storage location: {key}"
            )));
        }

        Ok(self.root.join(key))
    }

    fn map_io_err(e: std::io::Error) -> FileStorageError {
        FileStorageError::Io(e.to_string())
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn write(&self, bytes: &[u8]) -> Result<StoredObject, FileStorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(Self::map_io_err)?;

        let key = Uuid::new_v4().to_string();
        let path = self.root.join(&key);

        fs::write(&path, bytes).await.map_err(Self::map_io_err)?;

        tracing::debug!(location = %key, size = bytes.len(), "stored media content");

        Ok(StoredObject {
            location: StorageLocation::from(key),
            size_bytes: bytes.len() as u64,
        })
    }

    async fn delete(&self, location: &StorageLocation) -> Result<(), FileStorageError> {
        let path = self.object_path(location)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FileStorageError::NotFound),
            Err(e) => Err(Self::map_io_err(e)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
