use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::project_index::application::ports::outgoing::UpdateProjectIndexData;
use crate::modules::project_index::application::use_cases::UpdateProjectIndexError;
use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::api::ApiResponse;
use crate::shared::json_text::Lenient;
use crate::shared::lookup_key::LookupKey;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Absent keeps, null clears nullable fields. `project_id` cannot change.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProjectIndexRequest {
    #[serde(default)]
    pub project_title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub project_subtitle: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub project_cover_img: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub project_tech_stacks: Option<Lenient<Vec<String>>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub project_link: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github_link: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub project_status: PatchField<String>,
    #[serde(default)]
    pub personal: Option<bool>,
}

impl From<UpdateProjectIndexRequest> for UpdateProjectIndexData {
    fn from(req: UpdateProjectIndexRequest) -> Self {
        UpdateProjectIndexData {
            project_title: req.project_title,
            project_subtitle: req.project_subtitle,
            project_cover_img: req.project_cover_img,
            project_tech_stacks: req.project_tech_stacks.map(Lenient::into_inner),
            project_link: req.project_link,
            github_link: req.github_link,
            project_status: req.project_status,
            personal: req.personal,
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/project-index/{key}",
    tag = "project-index",
    params(("key" = String, Path, description = "project_id or internal UUID")),
    request_body = UpdateProjectIndexRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Project index updated", body = inline(SuccessResponse<ProjectIndex>)),
        (status = 400, description = "Blank required field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/project-index/{key}")]
pub async fn update_project_index_handler(
    _key: AdminKey,
    path: web::Path<String>,
    req: web::Json<UpdateProjectIndexRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = LookupKey::parse(&path.into_inner());

    match data
        .project_index
        .update
        .execute(&key, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(e @ UpdateProjectIndexError::ValidationFailed(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(UpdateProjectIndexError::NotFound) => {
            ApiResponse::not_found("PROJECT_INDEX_NOT_FOUND", "Project index not found")
        }

        Err(UpdateProjectIndexError::RepositoryError(e)) => {
            error!("Repository error updating project index {}: {}", key, e);
            ApiResponse::internal_error()
        }
    }
}
