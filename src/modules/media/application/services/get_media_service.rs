use async_trait::async_trait;

use crate::media::application::domain::entities::MediaDescriptor;
use crate::media::application::ports::incoming::use_cases::{
    GetMediaCommand, GetMediaError, GetMediaUseCase,
};
use crate::media::application::ports::outgoing::{AuthorizationPolicy, MediaRepository};

pub struct GetMediaService<R, P>
where
    R: MediaRepository,
    P: AuthorizationPolicy,
{
    repository: R,
    policy: P,
}

impl<R, P> GetMediaService<R, P>
where
    R: MediaRepository,
    P: AuthorizationPolicy,
{
    pub fn new(repository: R, policy: P) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<R, P> GetMediaUseCase for GetMediaService<R, P>
where
    R: MediaRepository + Send + Sync,
    P: AuthorizationPolicy + Send + Sync,
{
    async fn execute(&self, command: GetMediaCommand) -> Result<MediaDescriptor, GetMediaError> {
        let record = self
            .repository
            .find_by_id(command.media_id())
            .await
            .map_err(|e| GetMediaError::RepositoryError(e.to_string()))?
            .ok_or(GetMediaError::NotFound)?;

        if !self.policy.can_read(command.executor(), &record) {
            return Err(GetMediaError::NotAuthorized);
        }

        Ok(record.to_descriptor())
    }
}
