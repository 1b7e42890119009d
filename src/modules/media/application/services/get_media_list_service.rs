use async_trait::async_trait;

use crate::media::application::domain::entities::MediaDescriptor;
use crate::media::application::ports::incoming::use_cases::{
    GetMediaListCommand, GetMediaListError, GetMediaListUseCase,
};
use crate::media::application::ports::outgoing::{AuthorizationPolicy, MediaRepository};

pub struct GetMediaListService<R, P>
where
    R: MediaRepository,
    P: AuthorizationPolicy,
{
    repository: R,
    policy: P,
}

impl<R, P> GetMediaListService<R, P>
where
    R: MediaRepository,
    P: AuthorizationPolicy,
{
    pub fn new(repository: R, policy: P) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<R, P> GetMediaListUseCase for GetMediaListService<R, P>
where
    R: MediaRepository + Send + Sync,
    P: AuthorizationPolicy + Send + Sync,
{
    async fn execute(
        &self,
        command: GetMediaListCommand,
    ) -> Result<Vec<MediaDescriptor>, GetMediaListError> {
        let executor = command.executor();

        if !self.policy.can_list(executor) {
            return Err(GetMediaListError::NotAuthorized);
        }

        let mut records = if self.policy.can_view_all(executor) {
            self.repository.find_all().await
        } else {
            self.repository.find_by_owner(executor.id).await
        }
        .map_err(|e| GetMediaListError::RepositoryError(e.to_string()))?;

        // The ordering contract lives here, not in the adapter: creation
        // time ascending, id as the tie breaker for stability.
        records.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

        Ok(records.iter().map(|r| r.to_descriptor()).collect())
    }
}
