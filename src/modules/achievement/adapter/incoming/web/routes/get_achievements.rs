use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::achievement::domain::entities::Achievement;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = "achievements",
    responses(
        (status = 200, description = "All achievements, most recent first", body = inline(SuccessResponse<Vec<Achievement>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/achievements")]
pub async fn get_achievements_handler(data: web::Data<AppState>) -> impl Responder {
    match data.achievement.list.execute().await {
        Ok(achievements) => ApiResponse::success(achievements),
        Err(e) => {
            error!("Failed to list achievements: {}", e);
            ApiResponse::internal_error()
        }
    }
}
