use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project_index::application::use_cases::FetchProjectIndexError;
use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::api::ApiResponse;
use crate::shared::lookup_key::LookupKey;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/project-index/{key}",
    tag = "project-index",
    params(("key" = String, Path, description = "project_id or internal UUID")),
    responses(
        (status = 200, description = "Project index", body = inline(SuccessResponse<ProjectIndex>)),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/project-index/{key}")]
pub async fn get_project_index_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = LookupKey::parse(&path.into_inner());

    match data.project_index.get.execute(&key).await {
        Ok(index) => ApiResponse::success(index),
        Err(FetchProjectIndexError::NotFound) => {
            ApiResponse::not_found("PROJECT_INDEX_NOT_FOUND", "Project index not found")
        }
        Err(FetchProjectIndexError::RepositoryError(e)) => {
            error!("Repository error fetching project index {}: {}", key, e);
            ApiResponse::internal_error()
        }
    }
}
