use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::media::application::domain::entities::MediaRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaRepositoryError {
    #[error("Media not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Durable store for media metadata, keyed by record id.
///
/// `update_name` and `delete_by_id` are single conditional statements on the
/// id so that concurrent mutations of the same record serialize at the
/// database row, never in this process.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Persist a freshly minted record and echo the stored row.
    async fn save(&self, record: &MediaRecord) -> Result<MediaRecord, MediaRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaRecord>, MediaRepositoryError>;

    async fn find_by_owner(&self, owner: UserId)
        -> Result<Vec<MediaRecord>, MediaRepositoryError>;

    async fn find_all(&self) -> Result<Vec<MediaRecord>, MediaRepositoryError>;

    /// Update only the display name. `NotFound` if the row is absent.
    async fn update_name(&self, id: Uuid, name: &str)
        -> Result<MediaRecord, MediaRepositoryError>;

    /// Delete the record. `NotFound` if the row is absent.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), MediaRepositoryError>;
}
