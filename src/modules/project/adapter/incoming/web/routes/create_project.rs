use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, FeatureInput, GoalInput, TeamMemberInput, TimelineInput,
};
use crate::shared::api::ApiResponse;
use crate::shared::json_text::Lenient;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// JSON-valued fields accept the native value or a string holding its JSON.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub project_subtitle: Option<String>,
    #[serde(default)]
    pub project_cover_img: Option<String>,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub project_tech_stacks: Option<Lenient<Vec<String>>>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub technical_specifications: Option<Lenient<Value>>,
    #[serde(default)]
    pub project_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub project_status: Option<String>,
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

impl From<CreateProjectRequest> for CreateProjectData {
    fn from(req: CreateProjectRequest) -> Self {
        CreateProjectData {
            project_id: req.project_id,
            project_title: req.project_title,
            project_subtitle: req.project_subtitle,
            project_cover_img: req.project_cover_img,
            project_description: req.project_description,
            project_tech_stacks: req
                .project_tech_stacks
                .map(Lenient::into_inner)
                .unwrap_or_default(),
            technical_specifications: req
                .technical_specifications
                .map(Lenient::into_inner)
                .filter(|v| !v.is_null()),
            project_link: req.project_link,
            github_link: req.github_link,
            project_status: req.project_status,
            personal: req.personal.unwrap_or(false),
            features: req
                .project_features
                .map(Lenient::into_inner)
                .unwrap_or_default(),
            goals: req.project_goals.map(Lenient::into_inner).unwrap_or_default(),
            timeline: req
                .project_timeline
                .map(Lenient::into_inner)
                .unwrap_or_default(),
            team_members: req.team_members.map(Lenient::into_inner).unwrap_or_default(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<ProjectView>)),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 409, description = "project_id already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _key: AdminKey,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_data: CreateProjectData = req.into_inner().into();

    match data.project.create.execute(project_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::ValidationFailed(fields)) => ApiResponse::missing_fields(&fields),

        Err(CreateProjectError::ProjectIdAlreadyExists) => ApiResponse::conflict(
            "PROJECT_ID_ALREADY_EXISTS",
            "A project with this project_id already exists",
        ),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
