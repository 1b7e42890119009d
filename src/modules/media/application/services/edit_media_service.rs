use async_trait::async_trait;

use crate::media::application::domain::entities::MediaDescriptor;
use crate::media::application::ports::incoming::use_cases::{
    EditMediaCommand, EditMediaError, EditMediaUseCase,
};
use crate::media::application::ports::outgoing::{
    AuthorizationPolicy, MediaRepository, MediaRepositoryError,
};

pub struct EditMediaService<R, P>
where
    R: MediaRepository,
    P: AuthorizationPolicy,
{
    repository: R,
    policy: P,
}

impl<R, P> EditMediaService<R, P>
where
    R: MediaRepository,
    P: AuthorizationPolicy,
{
    pub fn new(repository: R, policy: P) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<R, P> EditMediaUseCase for EditMediaService<R, P>
where
    R: MediaRepository + Send + Sync,
    P: AuthorizationPolicy + Send + Sync,
{
    async fn execute(
        &self,
        command: EditMediaCommand,
    ) -> Result<MediaDescriptor, EditMediaError> {
        // 1) Existence first: not-found must be distinguishable from
        //    not-authorized.
        let record = self
            .repository
            .find_by_id(command.media_id())
            .await
            .map_err(|e| EditMediaError::RepositoryError(e.to_string()))?
            .ok_or(EditMediaError::NotFound)?;

        // 2) Authorize against the loaded record, before any mutation.
        if !self.policy.can_write(command.executor(), Some(&record)) {
            return Err(EditMediaError::NotAuthorized);
        }

        // 3) Conditional update on the id; the row may have been removed
        //    concurrently, which still surfaces as NotFound.
        let updated = self
            .repository
            .update_name(command.media_id(), command.name())
            .await
            .map_err(|e| match e {
                MediaRepositoryError::NotFound => EditMediaError::NotFound,
                MediaRepositoryError::DatabaseError(msg) => EditMediaError::RepositoryError(msg),
            })?;

        Ok(updated.to_descriptor())
    }
}
