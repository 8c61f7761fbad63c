use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::shared::api::ApiResponse;
use crate::shared::lookup_key::LookupKey;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{key}",
    tag = "projects",
    params(("key" = String, Path, description = "Internal UUID or project_id")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<ProjectView>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/{key}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = LookupKey::parse(&path.into_inner());

    match data.project.get_single.execute(&key).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::RepositoryError(e)) => {
            error!("Repository error fetching project {}: {}", key, e);
            ApiResponse::internal_error()
        }
    }
}
