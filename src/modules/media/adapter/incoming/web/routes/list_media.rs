use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::GatewayPrincipal;
use crate::media::adapter::incoming::web::routes::media_dto::MediaResponse;
use crate::media::application::ports::incoming::use_cases::{
    GetMediaListCommand, GetMediaListError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/medias")]
pub async fn list_media_handler(
    user: GatewayPrincipal,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = GetMediaListCommand::new(user.into_inner());

    match data.media.get_media_list.execute(command).await {
        Ok(descriptors) => ApiResponse::success(
            descriptors
                .into_iter()
                .map(MediaResponse::from_descriptor)
                .collect::<Vec<_>>(),
        ),

        Err(GetMediaListError::NotAuthorized) => {
            ApiResponse::forbidden("NOT_AUTHORIZED", "Executor may not list media")
        }

        Err(GetMediaListError::RepositoryError(e)) => {
            error!("Repository error listing media: {}", e);
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
    use uuid::Uuid;

    use crate::media::application::domain::entities::{MediaDescriptor, MediaType};
    use crate::media::application::ports::incoming::use_cases::GetMediaListUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockGetMediaListUseCase {
        result: Result<Vec<MediaDescriptor>, GetMediaListError>,
    }

    #[async_trait]
    impl GetMediaListUseCase for MockGetMediaListUseCase {
        async fn execute(
            &self,
            _command: GetMediaListCommand,
        ) -> Result<Vec<MediaDescriptor>, GetMediaListError> {
            self.result.clone()
        }
    }

    fn descriptor(name: &str) -> MediaDescriptor {
        MediaDescriptor {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4().into(),
            name: name.to_string(),
            media_type: MediaType::Audio,
            file_size_bytes: 1,
            created_at: chrono::Utc::now(),
        }
    }

    async fn call(app_state: actix_web::web::Data<AppState>) -> actix_web::dev::ServiceResponse {
        let app =
            test::init_service(App::new().app_data(app_state).service(list_media_handler)).await;

        let req = test::TestRequest::get()
            .uri("/medias")
            .insert_header(("x-user-id", Uuid::new_v4().to_string()))
            .insert_header(("x-user-role", "AUTHOR"))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_list_media_success_preserves_order() {
        let first = descriptor("first");
        let second = descriptor("second");

        let app_state = TestAppStateBuilder::default()
            .with_get_media_list(MockGetMediaListUseCase {
                result: Ok(vec![first.clone(), second.clone()]),
            })
            .build();

        let resp = call(app_state).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], first.id.to_string());
        assert_eq!(rows[1]["id"], second.id.to_string());
    }

    #[actix_web::test]
    async fn test_list_media_empty_is_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_media_list(MockGetMediaListUseCase {
                result: Ok(Vec::new()),
            })
            .build();

        let resp = call(app_state).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_list_media_forbidden() {
        let app_state = TestAppStateBuilder::default()
            .with_get_media_list(MockGetMediaListUseCase {
                result: Err(GetMediaListError::NotAuthorized),
            })
            .build();

        let resp = call(app_state).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_list_media_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_media_list(MockGetMediaListUseCase {
                result: Err(GetMediaListError::RepositoryError("db down".to_string())),
            })
            .build();

        let resp = call(app_state).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
