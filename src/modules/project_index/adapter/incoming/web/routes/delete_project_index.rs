use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::project_index::application::use_cases::DeleteProjectIndexError;
use crate::shared::api::ApiResponse;
use crate::shared::lookup_key::LookupKey;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/project-index/{key}",
    tag = "project-index",
    params(("key" = String, Path, description = "project_id or internal UUID")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Project index deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/project-index/{key}")]
pub async fn delete_project_index_handler(
    _key: AdminKey,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = LookupKey::parse(&path.into_inner());

    match data.project_index.delete.execute(&key).await {
        Ok(()) => ApiResponse::message("Project index deleted successfully"),
        Err(DeleteProjectIndexError::NotFound) => {
            ApiResponse::not_found("PROJECT_INDEX_NOT_FOUND", "Project index not found")
        }
        Err(DeleteProjectIndexError::RepositoryError(e)) => {
            error!("Repository error deleting project index {}: {}", key, e);
            ApiResponse::internal_error()
        }
    }
}
