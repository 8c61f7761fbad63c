use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::achievement::application::ports::incoming::use_cases::FetchAchievementError;
use crate::modules::achievement::domain::entities::Achievement;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/achievements/{id}",
    tag = "achievements",
    params(("id" = i32, Path, description = "Achievement id")),
    responses(
        (status = 200, description = "Achievement", body = inline(SuccessResponse<Achievement>)),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/achievements/{id}")]
pub async fn get_achievement_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.achievement.get.execute(id).await {
        Ok(achievement) => ApiResponse::success(achievement),
        Err(FetchAchievementError::NotFound) => {
            ApiResponse::not_found("ACHIEVEMENT_NOT_FOUND", "Achievement not found")
        }
        Err(FetchAchievementError::RepositoryError(e)) => {
            error!("Repository error fetching achievement {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
