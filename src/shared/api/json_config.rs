// src/shared/api/json_config.rs
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::JsonConfig;
use tracing::warn;

use crate::shared::api::ApiResponse;

/// Upper bound for JSON bodies (project payloads with nested collections).
pub const JSON_BODY_LIMIT: usize = 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, req| {
            let message = err.to_string();
            warn!(path = %req.path(), error = %message, "Rejected JSON body");

            let response = match &err {
                JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                    ApiResponse::payload_too_large("PAYLOAD_TOO_LARGE", &message)
                }
                _ => ApiResponse::bad_request("VALIDATION_ERROR", &message),
            };

            InternalError::from_response(err, response).into()
        })
}
