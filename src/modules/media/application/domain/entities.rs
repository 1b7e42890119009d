use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Kind of a stored asset. Fixed at creation, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Document,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
            MediaType::Document => "document",
        };
        write!(f, "{s}")
    }
}

/// Opaque reference into the content store. Only the file storage adapter
/// knows how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageLocation(String);

impl StorageLocation {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StorageLocation {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata row for one stored asset.
///
/// Invariant: a record exists if and only if its `storage_location` object
/// exists in the content store. The create and remove use cases are the only
/// writers and both enforce the cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: Uuid,
    pub owner_id: UserId,
    pub name: String,
    pub media_type: MediaType,
    pub storage_location: StorageLocation,
    pub file_size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

impl MediaRecord {
    /// Mint a fresh record. Identity and timestamp are generated here;
    /// everything except `name` is immutable from this point on.
    pub fn new(
        owner_id: UserId,
        name: String,
        media_type: MediaType,
        storage_location: StorageLocation,
        file_size_bytes: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            media_type,
            storage_location,
            file_size_bytes,
            created_at: Utc::now(),
        }
    }

    pub fn to_descriptor(&self) -> MediaDescriptor {
        MediaDescriptor {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name.clone(),
            media_type: self.media_type,
            file_size_bytes: self.file_size_bytes,
            created_at: self.created_at,
        }
    }
}

/// Externally returned representation of a media record. The storage
/// location deliberately stays internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub id: Uuid,
    pub owner_id: UserId,
    pub name: String,
    pub media_type: MediaType,
    pub file_size_bytes: u64,
    pub created_at: DateTime<Utc>,
}
