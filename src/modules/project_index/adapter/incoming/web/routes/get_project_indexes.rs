use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/project-index",
    tag = "project-index",
    responses(
        (status = 200, description = "All project indexes, oldest first", body = inline(SuccessResponse<Vec<ProjectIndex>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/project-index")]
pub async fn get_project_indexes_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project_index.list.execute().await {
        Ok(indexes) => ApiResponse::success(indexes),
        Err(e) => {
            error!("Failed to list project indexes: {}", e);
            ApiResponse::internal_error()
        }
    }
}
