use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::GatewayPrincipal;
use crate::media::application::ports::incoming::use_cases::{
    RemoveMediaCommand, RemoveMediaError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/medias/{media_id}")]
pub async fn remove_media_handler(
    user: GatewayPrincipal,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let media_id = path.into_inner();
    let command = RemoveMediaCommand::new(media_id, user.into_inner());

    match data.media.remove_media.execute(command).await {
        Ok(()) => ApiResponse::no_content(),

        Err(RemoveMediaError::NotFound) => {
            ApiResponse::not_found("MEDIA_NOT_FOUND", "Media not found")
        }

        Err(RemoveMediaError::NotAuthorized) => {
            ApiResponse::forbidden("NOT_AUTHORIZED", "Executor may not remove this media")
        }

        Err(RemoveMediaError::RepositoryError(e)) => {
            error!("Repository error removing media {}: {}", media_id, e);
            ApiResponse::internal_error()
        }

        Err(RemoveMediaError::Inconsistent(e)) => {
            error!("Partial removal of media {}: {}", media_id, e);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONSISTENCY_ERROR",
                "Media removal did not complete cleanly",
            )
        }
    }
}
