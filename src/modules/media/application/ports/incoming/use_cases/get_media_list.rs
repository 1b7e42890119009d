use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::media::application::domain::entities::MediaDescriptor;

#[derive(Debug, Clone)]
pub struct GetMediaListCommand {
    executor: Principal,
}

impl GetMediaListCommand {
    pub fn new(executor: Principal) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &Principal {
        &self.executor
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMediaListError {
    #[error("Not authorized to list media")]
    NotAuthorized,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Listing scope depends on the executor: admins see every record, authors
/// only their own. Ordering is creation time ascending, ties broken by id.
#[async_trait]
pub trait GetMediaListUseCase: Send + Sync {
    async fn execute(
        &self,
        command: GetMediaListCommand,
    ) -> Result<Vec<MediaDescriptor>, GetMediaListError>;
}
