use actix_multipart::Multipart;
use actix_web::{post, web, Responder};

use super::super::achievement_form::{from_parsed, save_error_response, IMAGE_FIELD};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::achievement::domain::entities::Achievement;
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::multimedia::adapter::incoming::web::multipart_form::read_form;
use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Multipart form: `title`, `date` (required), `type`, `description`,
/// `category` and an optional `image` file.
#[utoipa::path(
    post,
    path = "/api/achievements",
    tag = "achievements",
    request_body(content_type = "multipart/form-data", description = "title, type, date, description, category, image"),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Achievement created", body = inline(SuccessResponse<Achievement>)),
        (status = 400, description = "Missing fields or bad date", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse),
        (status = 415, description = "Not an image", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/achievements")]
pub async fn create_achievement_handler(
    _key: AdminKey,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let parsed = match read_form(payload, IMAGE_FIELD, &UploadPolicy::achievement_image()).await {
        Ok(parsed) => parsed,
        Err(e) => return e.into_response(),
    };

    match data.achievement.create.execute(from_parsed(parsed)).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => save_error_response(e),
    }
}
