use async_trait::async_trait;

use crate::media::application::domain::entities::StorageLocation;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileStorageError {
    #[error("Object not found")]
    NotFound,

    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Result of persisting one blob of content.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub location: StorageLocation,
    pub size_bytes: u64,
}

/// Durable store for raw content bytes, keyed by an opaque location.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persist the bytes and return where they ended up plus their length.
    async fn write(&self, bytes: &[u8]) -> Result<StoredObject, FileStorageError>;

    /// Remove the object. `NotFound` if nothing lives at the location.
    async fn delete(&self, location: &StorageLocation) -> Result<(), FileStorageError>;
}
