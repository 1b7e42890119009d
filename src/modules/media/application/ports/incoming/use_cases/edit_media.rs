use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::media::application::domain::entities::MediaDescriptor;
use super::create_media::{MediaCommandError, MAX_NAME_LEN};

/// Rename request. Name is the only mutable attribute of a record.
#[derive(Debug, Clone)]
pub struct EditMediaCommand {
    media_id: Uuid,
    executor: Principal,
    name: String,
}

impl EditMediaCommand {
    pub fn try_new(
        media_id: Uuid,
        executor: Principal,
        name: String,
    ) -> Result<Self, MediaCommandError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(MediaCommandError::MissingField("name"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(MediaCommandError::NameTooLong {
                max_len: MAX_NAME_LEN,
                actual_len: name.len(),
            });
        }

        Ok(Self {
            media_id,
            executor,
            name,
        })
    }

    pub fn media_id(&self) -> Uuid {
        self.media_id
    }
    pub fn executor(&self) -> &Principal {
        &self.executor
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditMediaError {
    #[error("Media not found")]
    NotFound,

    #[error("Not authorized to edit this media")]
    NotAuthorized,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditMediaUseCase: Send + Sync {
    async fn execute(&self, command: EditMediaCommand)
        -> Result<MediaDescriptor, EditMediaError>;
}
