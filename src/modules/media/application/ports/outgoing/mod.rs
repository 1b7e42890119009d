pub mod authorization;
pub mod file_storage;
pub mod media_repository;

pub use authorization::AuthorizationPolicy;
pub use file_storage::{FileStorage, FileStorageError, StoredObject};
pub use media_repository::{MediaRepository, MediaRepositoryError};
