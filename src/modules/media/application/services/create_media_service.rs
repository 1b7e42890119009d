use async_trait::async_trait;

use crate::media::application::domain::entities::{MediaDescriptor, MediaRecord};
use crate::media::application::ports::incoming::use_cases::{
    CreateMediaCommand, CreateMediaError, CreateMediaUseCase,
};
use crate::media::application::ports::outgoing::{
    AuthorizationPolicy, FileStorage, MediaRepository,
};

pub struct CreateMediaService<R, S, P>
where
    R: MediaRepository,
    S: FileStorage,
    P: AuthorizationPolicy,
{
    repository: R,
    file_storage: S,
    policy: P,
}

impl<R, S, P> CreateMediaService<R, S, P>
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
impl<R, S, P> CreateMediaUseCase for CreateMediaService<R, S, P>
where
    R: MediaRepository + Send + Sync,
    S: FileStorage + Send + Sync,
    P: AuthorizationPolicy + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateMediaCommand,
    ) -> Result<MediaDescriptor, CreateMediaError> {
        // 1) Authorize before any side effect.
        if !self.policy.can_write(command.executor(), None) {
            return Err(CreateMediaError::NotAuthorized);
        }

        // 2) Persist the content first; the record must reference a real
        //    storage location.
        let stored = self
            .file_storage
            .write(command.file())
            .await
            .map_err(|e| CreateMediaError::StorageError(e.to_string()))?;

        let record = MediaRecord::new(
            command.executor().id,
            command.name().to_string(),
            command.media_type(),
            stored.location,
            stored.size_bytes,
        );

        // 3) Persist the metadata. If this fails the just-written object is
        //    an orphan and must be removed before reporting the error.
        match self.repository.save(&record).await {
            Ok(saved) => Ok(saved.to_descriptor()),
            Err(save_err) => {
                tracing::error!(
                    media_id = %record.id,
                    location = %record.storage_location,
                    "metadata save failed after content write: {save_err}"
                );

                match self.file_storage.delete(&record.storage_location).await {
                    Ok(()) => Err(CreateMediaError::RepositoryError(save_err.to_string())),
                    Err(delete_err) => {
                        tracing::error!(
                            location = %record.storage_location,
                            "compensating delete failed, content orphaned: {delete_err}"
                        );
                        Err(CreateMediaError::Inconsistent {
                            location: record.storage_location.to_string(),
                            reason: delete_err.to_string(),
                        })
                    }
                }
            }
        }
    }
}
