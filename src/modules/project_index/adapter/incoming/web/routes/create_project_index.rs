use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminKey;
use crate::modules::project_index::application::ports::outgoing::CreateProjectIndexData;
use crate::modules::project_index::application::use_cases::CreateProjectIndexError;
use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::api::ApiResponse;
use crate::shared::json_text::Lenient;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateProjectIndexRequest {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub project_subtitle: Option<String>,
    #[serde(default)]
    pub project_cover_img: Option<String>,
    /// A JSON array or a string holding one
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub project_tech_stacks: Option<Lenient<Vec<String>>>,
    #[serde(default)]
    pub project_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub project_status: Option<String>,
    #[serde(default)]
    pub personal: Option<bool>,
}

impl From<CreateProjectIndexRequest> for CreateProjectIndexData {
    fn from(req: CreateProjectIndexRequest) -> Self {
        CreateProjectIndexData {
            project_id: req.project_id,
            project_title: req.project_title,
            project_subtitle: req.project_subtitle,
            project_cover_img: req.project_cover_img,
            project_tech_stacks: req
                .project_tech_stacks
                .map(Lenient::into_inner)
                .unwrap_or_default(),
            project_link: req.project_link,
            github_link: req.github_link,
            project_status: req.project_status,
            personal: req.personal.unwrap_or(false),
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/project-index",
    tag = "project-index",
    request_body = CreateProjectIndexRequest,
    security(("ApiKeyAuth" = [])),
    responses(
        (status = 201, description = "Project index created", body = inline(SuccessResponse<ProjectIndex>)),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 409, description = "project_id already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/project-index")]
pub async fn create_project_index_handler(
    _key: AdminKey,
    req: web::Json<CreateProjectIndexRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project_index.create.execute(req.into_inner().into()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectIndexError::ValidationFailed(fields)) => {
            ApiResponse::missing_fields(&fields)
        }

        Err(CreateProjectIndexError::ProjectIdAlreadyExists) => ApiResponse::conflict(
            "PROJECT_INDEX_ALREADY_EXISTS",
            "A project index with this project_id already exists",
        ),

        Err(CreateProjectIndexError::RepositoryError(e)) => {
            error!("Repository error creating project index: {}", e);
            ApiResponse::internal_error()
        }
    }
}
