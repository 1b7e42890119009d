use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::media::application::domain::entities::{MediaDescriptor, MediaType};
use crate::media::application::ports::incoming::use_cases::MediaCommandError;
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Response DTO shared by the media routes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub file_size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

impl MediaResponse {
    pub fn from_descriptor(descriptor: MediaDescriptor) -> Self {
        Self {
            id: descriptor.id,
            owner_id: descriptor.owner_id.value(),
            name: descriptor.name,
            media_type: descriptor.media_type,
            file_size_bytes: descriptor.file_size_bytes,
            created_at: descriptor.created_at,
        }
    }
}

pub fn map_command_error(e: MediaCommandError) -> HttpResponse {
    match e {
        MediaCommandError::MissingField(field) => {
            ApiResponse::bad_request("MISSING_FIELD", &format!("Missing field: {}", field))
        }
        MediaCommandError::EmptyFile => {
            ApiResponse::bad_request("EMPTY_FILE", "File content is empty")
        }
        MediaCommandError::NameTooLong {
            max_len,
            actual_len,
        } => ApiResponse::bad_request(
            "NAME_TOO_LONG",
            &format!("Name too long (max {} chars, got {})", max_len, actual_len),
        ),
    }
}
