use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::GatewayPrincipal;
use crate::media::adapter::incoming::web::routes::media_dto::MediaResponse;
use crate::media::application::ports::incoming::use_cases::{GetMediaCommand, GetMediaError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/medias/{media_id}")]
pub async fn get_media_handler(
    user: GatewayPrincipal,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let media_id = path.into_inner();
    let command = GetMediaCommand::new(media_id, user.into_inner());

    match data.media.get_media.execute(command).await {
        Ok(descriptor) => ApiResponse::success(MediaResponse::from_descriptor(descriptor)),

        Err(GetMediaError::NotFound) => {
            ApiResponse::not_found("MEDIA_NOT_FOUND", "Media not found")
        }

        Err(GetMediaError::NotAuthorized) => {
            ApiResponse::forbidden("NOT_AUTHORIZED", "Executor may not view this media")
        }

        Err(GetMediaError::RepositoryError(e)) => {
            error!("Repository error fetching media {}: {}", media_id, e);
            ApiResponse::internal_error()
        }
    }
}
