use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Principal, UserId, UserRole};
use crate::shared::api::ApiResponse;

/// Principal resolved by the upstream auth gateway.
///
/// Token verification happens before requests reach this service; the
/// gateway strips any client-supplied identity headers and installs
/// `x-user-id` / `x-user-role` from the verified token. This extractor only
/// parses those two headers back into a [`Principal`].
#[derive(Debug, Clone)]
pub struct GatewayPrincipal(pub Principal);

impl GatewayPrincipal {
    pub fn into_inner(self) -> Principal {
        self.0
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn header_str<'r>(req: &'r HttpRequest, name: &str) -> Option<&'r str> {
    req.headers().get(name)?.to_str().ok()
}

impl FromRequest for GatewayPrincipal {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = match header_str(req, "x-user-id").map(Uuid::parse_str) {
            Some(Ok(id)) => UserId::from(id),
            Some(Err(_)) => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_PRINCIPAL",
                    "Malformed x-user-id header",
                ))));
            }
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_PRINCIPAL",
                    "Missing x-user-id header",
                ))));
            }
        };

        let role = match header_str(req, "x-user-role").map(UserRole::from_str) {
            Some(Ok(role)) => role,
            Some(Err(())) => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_PRINCIPAL",
                    "Unknown x-user-role header",
                ))));
            }
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_PRINCIPAL",
                    "Missing x-user-role header",
                ))));
            }
        };

        ready(Ok(GatewayPrincipal(Principal::new(user_id, role))))
    }
}
