use async_trait::async_trait;

use crate::media::application::ports::incoming::use_cases::{
    RemoveMediaCommand, RemoveMediaError, RemoveMediaUseCase,
};
use crate::media::application::ports::outgoing::{
    AuthorizationPolicy, FileStorage, FileStorageError, MediaRepository,
};

pub struct RemoveMediaService<R, S, P>
where
    R: MediaRepository,
    S: FileStorage,
    P: AuthorizationPolicy,
{
    repository: R,
    file_storage: S,
    policy: P,
}

impl<R, S, P> RemoveMediaService<R, S, P>
where
    R: MediaRepository,
    S: FileStorage,
    P: AuthorizationPolicy,
{
    pub fn new(repository: R, file_storage: S, policy: P) -> Self {
        Self {
            repository,
            file_storage,
            policy,
        }
    }
}

#[async_trait]
impl<R, S, P> RemoveMediaUseCase for RemoveMediaService<R, S, P>
where
    R: MediaRepository + Send + Sync,
    S: FileStorage + Send + Sync,
    P: AuthorizationPolicy + Send + Sync,
{
    async fn execute(&self, command: RemoveMediaCommand) -> Result<(), RemoveMediaError> {
        let record = self
            .repository
            .find_by_id(command.media_id())
            .await
            .map_err(|e| RemoveMediaError::RepositoryError(e.to_string()))?
            .ok_or(RemoveMediaError::NotFound)?;

        if !self.policy.can_write(command.executor(), Some(&record)) {
            return Err(RemoveMediaError::NotAuthorized);
        }

        // Both deletions are attempted regardless of the other's outcome;
        // a half-removed record must never pass silently.
        let metadata = self.repository.delete_by_id(record.id).await;
        let content = self.file_storage.delete(&record.storage_location).await;

        match (metadata, content) {
            (Ok(()), Ok(())) => Ok(()),

            // Content was already missing: the post state is exactly what
            // remove promises, but the anomaly gets logged.
            (Ok(()), Err(FileStorageError::NotFound)) => {
                tracing::warn!(
                    media_id = %record.id,
                    location = %record.storage_location,
                    "content already absent while removing media"
                );
                Ok(())
            }

            (Ok(()), Err(content_err)) => {
                tracing::error!(
                    media_id = %record.id,
                    location = %record.storage_location,
                    "metadata removed but content delete failed: {content_err}"
                );
                Err(RemoveMediaError::Inconsistent(format!(
                    "metadata removed, content remains at {}: {content_err}",
                    record.storage_location
                )))
            }

            (Err(metadata_err), Ok(())) => {
                tracing::error!(
                    media_id = %record.id,
                    "content removed but metadata delete failed: {metadata_err}"
                );
                Err(RemoveMediaError::Inconsistent(format!(
                    "content removed, metadata remains for {}: {metadata_err}",
                    record.id
                )))
            }

            // Nothing was deleted; the stores are still consistent.
            (Err(metadata_err), Err(content_err)) => Err(RemoveMediaError::RepositoryError(
                format!("metadata: {metadata_err}; content: {content_err}"),
            )),
        }
    }
}
