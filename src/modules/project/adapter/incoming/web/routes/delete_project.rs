use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::shared::lookup_key::LookupKey;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/projects/{key}",
    tag = "projects",
    params(("key" = String, Path, description = "Internal UUID or project_id")),
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Project, children and detail deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/projects/{key}")]
pub async fn delete_project_handler(
    _key: AdminKey,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = LookupKey::parse(&path.into_inner());

    match data.project.delete.execute(&key).await {
        Ok(()) => ApiResponse::message("Project deleted successfully"),

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", key, e);
            ApiResponse::internal_error()
        }
    }
}
