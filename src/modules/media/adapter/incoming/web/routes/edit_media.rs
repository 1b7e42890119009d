use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::GatewayPrincipal;
use crate::media::adapter::incoming::web::routes::media_dto::{
    map_command_error, MediaResponse,
};
use crate::media::application::ports::incoming::use_cases::{EditMediaCommand, EditMediaError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct EditMediaBody {
    pub name: String,
}

#[put("/medias/{media_id}")]
pub async fn edit_media_handler(
    user: GatewayPrincipal,
    path: web::Path<Uuid>,
    body: web::Json<EditMediaBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let media_id = path.into_inner();

    let command = match EditMediaCommand::try_new(media_id, user.into_inner(), body.into_inner().name)
    {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.media.edit_media.execute(command).await {
        Ok(descriptor) => ApiResponse::success(MediaResponse::from_descriptor(descriptor)),

        Err(EditMediaError::NotFound) => {
            ApiResponse::not_found("MEDIA_NOT_FOUND", "Media not found")
        }

        Err(EditMediaError::NotAuthorized) => {
            ApiResponse::forbidden("NOT_AUTHORIZED", "Executor may not edit this media")
        }

        Err(EditMediaError::RepositoryError(e)) => {
            error!("Repository error editing media {}: {}", media_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::media::application::domain::entities::{MediaDescriptor, MediaType};
    use crate::media::application::ports::incoming::use_cases::EditMediaUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockEditMediaUseCase {
        result: Result<MediaDescriptor, EditMediaError>,
    }

    #[async_trait]
    impl EditMediaUseCase for MockEditMediaUseCase {
        async fn execute(
            &self,
            _command: EditMediaCommand,
        ) -> Result<MediaDescriptor, EditMediaError> {
            self.result.clone()
        }
    }

    fn descriptor(name: &str) -> MediaDescriptor {
        MediaDescriptor {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4().into(),
            name: name.to_string(),
            media_type: MediaType::Image,
            file_size_bytes: 9,
            created_at: chrono::Utc::now(),
        }
    }

    async fn call_with_body(
        app_state: actix_web::web::Data<AppState>,
        name: &str,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new().app_data(app_state).service(edit_media_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/medias/{}", Uuid::new_v4()))
            .insert_header(("x-user-id", Uuid::new_v4().to_string()))
            .insert_header(("x-user-role", "AUTHOR"))
            .set_json(EditMediaBody {
                name: name.to_string(),
            })
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_edit_media_success() {
        let app_state = TestAppStateBuilder::default()
            .with_edit_media(MockEditMediaUseCase {
                result: Ok(descriptor("renamed")),
            })
            .build();

        let resp = call_with_body(app_state, "renamed").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "renamed");
    }

    #[actix_web::test]
    async fn test_edit_media_blank_name_is_rejected() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call_with_body(app_state, "   ").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_FIELD");
    }

    #[actix_web::test]
    async fn test_edit_media_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_edit_media(MockEditMediaUseCase {
                result: Err(EditMediaError::NotFound),
            })
            .build();

        let resp = call_with_body(app_state, "renamed").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MEDIA_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_edit_media_forbidden() {
        let app_state = TestAppStateBuilder::default()
            .with_edit_media(MockEditMediaUseCase {
                result: Err(EditMediaError::NotAuthorized),
            })
            .build();

        let resp = call_with_body(app_state, "renamed").await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_AUTHORIZED");
    }

    #[actix_web::test]
    async fn test_edit_media_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_edit_media(MockEditMediaUseCase {
                result: Err(EditMediaError::RepositoryError("db down".to_string())),
            })
            .build();

        let resp = call_with_body(app_state, "renamed").await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
