use async_trait::async_trait;
use std::path::Path;

use crate::auth::application::domain::entities::Principal;
use crate::media::application::domain::entities::{MediaDescriptor, MediaType};

pub const MAX_NAME_LEN: usize = 255;

/// Rejections raised while constructing a command, before any business
/// logic or side effect runs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaCommandError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("File content is empty")]
    EmptyFile,

    #[error("Name too long (max {max_len} chars, got {actual_len})")]
    NameTooLong { max_len: usize, actual_len: usize },
}

/// Resolve the display name: an explicit non-blank name wins, otherwise the
/// base name of the uploaded file with its extension stripped.
fn resolve_display_name(
    name: Option<&str>,
    file_name: Option<&str>,
) -> Result<String, MediaCommandError> {
    let explicit = name.map(str::trim).filter(|s| !s.is_empty());

    let resolved = match explicit {
        Some(name) => name.to_string(),
        None => {
            let hint = file_name
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(MediaCommandError::MissingField("name"))?;

            Path::new(hint)
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(MediaCommandError::MissingField("name"))?
                .to_string()
        }
    };

    if resolved.len() > MAX_NAME_LEN {
        return Err(MediaCommandError::NameTooLong {
            max_len: MAX_NAME_LEN,
            actual_len: resolved.len(),
        });
    }

    Ok(resolved)
}

/// Validated input for media creation. Construct through [`builder`].
///
/// [`builder`]: CreateMediaCommand::builder
#[derive(Debug, Clone)]
pub struct CreateMediaCommand {
    executor: Principal,
    name: String,
    media_type: MediaType,
    file: Vec<u8>,
}

impl CreateMediaCommand {
    pub fn builder() -> CreateMediaCommandBuilder {
        CreateMediaCommandBuilder::default()
    }

    pub fn executor(&self) -> &Principal {
        &self.executor
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }
    pub fn file(&self) -> &[u8] {
        &self.file
    }
}

#[derive(Default)]
pub struct CreateMediaCommandBuilder {
    executor: Option<Principal>,
    name: Option<String>,
    file_name: Option<String>,
    media_type: Option<MediaType>,
    file: Option<Vec<u8>>,
}

impl CreateMediaCommandBuilder {
    pub fn executor(mut self, executor: Principal) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Base-name hint from the upload, used when no explicit name is given.
    pub fn file_name(mut self, file_name: Option<String>) -> Self {
        self.file_name = file_name;
        self
    }

    pub fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn file(mut self, file: Vec<u8>) -> Self {
        self.file = Some(file);
        self
    }

    pub fn build(self) -> Result<CreateMediaCommand, MediaCommandError> {
        let executor = self
            .executor
            .ok_or(MediaCommandError::MissingField("executor"))?;
        let media_type = self
            .media_type
            .ok_or(MediaCommandError::MissingField("type"))?;
        let file = self.file.ok_or(MediaCommandError::MissingField("file"))?;

        if file.is_empty() {
            return Err(MediaCommandError::EmptyFile);
        }

        let name = resolve_display_name(self.name.as_deref(), self.file_name.as_deref())?;

        Ok(CreateMediaCommand {
            executor,
            name,
            media_type,
            file,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateMediaError {
    #[error("Not authorized to create media")]
    NotAuthorized,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Stored content left orphaned at {location}: {reason}")]
    Inconsistent { location: String, reason: String },
}

#[async_trait]
pub trait CreateMediaUseCase: Send + Sync {
    async fn execute(&self, command: CreateMediaCommand)
        -> Result<MediaDescriptor, CreateMediaError>;
}
