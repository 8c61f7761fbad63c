use actix_web::{put, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project::application::ports::outgoing::project_repository::{
    FeatureInput, GoalInput, TeamMemberInput, TimelineInput, UpdateProjectData,
};
use crate::shared::api::ApiResponse;
use crate::shared::json_text::Lenient;
use crate::shared::lookup_key::LookupKey;
use crate::shared::patch::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
// Absent keeps the stored value, null clears nullable columns.
// A child collection that is present replaces the stored one
// (an empty array clears it); absent or null leaves it alone.
// project_id is immutable and ignored here.
//

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub project_title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub project_subtitle: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub project_cover_img: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub project_description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub project_tech_stacks: Option<Lenient<Vec<String>>>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub technical_specifications: PatchField<Lenient<Value>>,
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
    #[serde(default)]
    #[schema(value_type = Option<Vec<FeatureInput>>)]
    pub project_features: Option<Lenient<Vec<FeatureInput>>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<GoalInput>>)]
    pub project_goals: Option<Lenient<Vec<GoalInput>>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<TimelineInput>>)]
    pub project_timeline: Option<Lenient<Vec<TimelineInput>>>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<TeamMemberInput>>)]
    pub team_members: Option<Lenient<Vec<TeamMemberInput>>>,
}

impl From<UpdateProjectRequest> for UpdateProjectData {
    fn from(req: UpdateProjectRequest) -> Self {
        UpdateProjectData {
            project_title: req.project_title,
            project_subtitle: req.project_subtitle,
            project_cover_img: req.project_cover_img,
            project_description: req.project_description,
            project_tech_stacks: req.project_tech_stacks.map(Lenient::into_inner),
            technical_specifications: req.technical_specifications.map(Lenient::into_inner),
            project_link: req.project_link,
            github_link: req.github_link,
            project_status: req.project_status,
            personal: req.personal,
            features: req.project_features.map(Lenient::into_inner),
            goals: req.project_goals.map(Lenient::into_inner),
            timeline: req.project_timeline.map(Lenient::into_inner),
            team_members: req.team_members.map(Lenient::into_inner),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    put,
    path = "/api/projects/{key}",
    tag = "projects",
    params(("key" = String, Path, description = "Internal UUID or project_id")),
    request_body = UpdateProjectRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<ProjectView>)),
        (status = 400, description = "Blank project_title", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/projects/{key}")]
pub async fn update_project_handler(
    _key: AdminKey,
    path: web::Path<String>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = LookupKey::parse(&path.into_inner());
    let update: UpdateProjectData = req.into_inner().into();

    match data.project.update.execute(&key, update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProjectError::ValidationFailed(fields)) => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!("Required fields cannot be blank: {}", fields.join(", ")),
        ),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", key, e);
            ApiResponse::internal_error()
        }
    }
}
