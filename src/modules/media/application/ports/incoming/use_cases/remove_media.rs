use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;

#[derive(Debug, Clone)]
pub struct RemoveMediaCommand {
    media_id: Uuid,
    executor: Principal,
}

impl RemoveMediaCommand {
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
pub enum RemoveMediaError {
    #[error("Media not found")]
    NotFound,

    #[error("Not authorized to remove this media")]
    NotAuthorized,

    /// One or both deletions failed with nothing removed; both causes are
    /// carried in the message.
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Exactly one of the two stores was cleared; the survivor is named in
    /// the message.
    #[error("Partial removal left stores inconsistent: {0}")]
    Inconsistent(String),
}

#[async_trait]
pub trait RemoveMediaUseCase: Send + Sync {
    async fn execute(&self, command: RemoveMediaCommand) -> Result<(), RemoveMediaError>;
}
