use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::warn;

use crate::modules::auth::application::ports::incoming::{ApiKeyError, ApiKeyVerifier};
use crate::shared::api::ApiResponse;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request carried the configured API key.
///
/// Taking it as a handler argument rejects the request before the body is
/// read or any use case runs.
#[derive(Debug, Clone)]
pub struct AdminKey;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminKey {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = match req.app_data::<web::Data<Arc<dyn ApiKeyVerifier + Send + Sync>>>() {
            Some(verifier) => verifier,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let presented = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        match verifier.verify(presented) {
            Ok(()) => ready(Ok(AdminKey)),
            Err(ApiKeyError::Missing) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_API_KEY",
                "Valid API key is required for this operation",
            )))),
            Err(ApiKeyError::Invalid) => {
                warn!(path = %req.path(), method = %req.method(), "Rejected invalid API key");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_API_KEY",
                    "Valid API key is required for this operation",
                ))))
            }
        }
    }
}
