use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::media::application::domain::entities::MediaDescriptor;

#[derive(Debug, Clone)]
pub struct GetMediaCommand {
    media_id: Uuid,
    executor: Principal,
}

impl GetMediaCommand {
    pub fn new(media_id: Uuid, executor: Principal) -> Self {
        Self { media_id, executor }
    }

    pub fn media_id(&self) -> Uuid {
        self.media_id
    }
    pub fn executor(&self) -> &Principal {
        &self.executor
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMediaError {
    #[error("Media not found")]
    NotFound,

    #[error("Not authorized to view this media")]
    NotAuthorized,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetMediaUseCase: Send + Sync {
    async fn execute(&self, command: GetMediaCommand) -> Result<MediaDescriptor, GetMediaError>;
}
