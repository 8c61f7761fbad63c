use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectDetailError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectDetailView;
use crate::shared::api::ApiResponse;
use crate::shared::lookup_key::LookupKey;
use crate::AppState;

/// Empty images and flowchart when the project has no detail yet.
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/detail",
    tag = "project-details",
    params(("project_id" = String, Path, description = "Business key of the project")),
    responses(
        (status = 200, description = "Project detail", body = inline(SuccessResponse<ProjectDetailView>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/{project_id}/detail")]
pub async fn get_project_detail_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = LookupKey::project_id(&path.into_inner());

    match data.project.get_detail.execute(&key).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetProjectDetailError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectDetailError::RepositoryError(e)) => {
            error!("Repository error fetching detail of {}: {}", key, e);
            ApiResponse::internal_error()
        }
    }
}
