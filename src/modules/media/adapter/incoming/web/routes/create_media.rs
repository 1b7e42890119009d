use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::GatewayPrincipal;
use crate::media::adapter::incoming::web::routes::media_dto::{
    map_command_error, MediaResponse,
};
use crate::media::application::domain::entities::MediaType;
use crate::media::application::ports::incoming::use_cases::{
    CreateMediaCommand, CreateMediaError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Multipart decoding happens upstream; this endpoint receives the raw
/// bytes plus an optional file-name hint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaQuery {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub media_type: MediaType,

    #[serde(default)]
    pub file_name: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/medias")]
pub async fn create_media_handler(
    user: GatewayPrincipal,
    query: web::Query<CreateMediaQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let command = match CreateMediaCommand::builder()
        .executor(user.into_inner())
        .name(query.name)
        .file_name(query.file_name)
        .media_type(query.media_type)
        .file(body.to_vec())
        .build()
    {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.media.create_media.execute(command).await {
        Ok(descriptor) => ApiResponse::success(MediaResponse::from_descriptor(descriptor)),

        Err(CreateMediaError::NotAuthorized) => ApiResponse::forbidden(
            "NOT_AUTHORIZED",
            "Executor may not create media",
        ),

        Err(CreateMediaError::StorageError(e)) => {
            error!("Storage error creating media: {}", e);
            ApiResponse::error(
                actix_web::http::StatusCode::BAD_GATEWAY,
                "STORAGE_ERROR",
                "Failed to store media content",
            )
        }

        Err(CreateMediaError::RepositoryError(e)) => {
            error!("Repository error creating media: {}", e);
            ApiResponse::internal_error()
        }

        Err(CreateMediaError::Inconsistent { location, reason }) => {
            error!(
                "Media creation left orphaned content at {}: {}",
                location, reason
            );
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONSISTENCY_ERROR",
                "Media creation failed and cleanup did not complete",
            )
        }
    }
}
