use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::achievement::application::ports::incoming::use_cases::DeleteAchievementError;
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/achievements/{id}",
    tag = "achievements",
    params(("id" = i32, Path, description = "Achievement id")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Achievement deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/achievements/{id}")]
pub async fn delete_achievement_handler(
    _key: AdminKey,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.achievement.delete.execute(id).await {
        Ok(()) => ApiResponse::message("Achievement deleted successfully"),
        Err(DeleteAchievementError::NotFound) => {
            ApiResponse::not_found("ACHIEVEMENT_NOT_FOUND", "Achievement not found")
        }
        Err(DeleteAchievementError::RepositoryError(e)) => {
            error!("Repository error deleting achievement {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
