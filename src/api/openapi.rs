use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageData, MessageResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::achievement::domain::entities::Achievement;
use crate::modules::auth::adapter::incoming::web::extractors::API_KEY_HEADER;
use crate::modules::project::adapter::incoming::web::routes::{
    CreateProjectRequest, UpdateProjectRequest,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    FeatureItem, Flowchart, GoalItem, ProjectDetailItem, ProjectDetailView, ProjectView,
    TeamMemberItem, TimelineItem,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    FeatureInput, GoalInput, TeamMemberInput, TimelineInput,
};
use crate::modules::project_index::adapter::incoming::web::routes::{
    CreateProjectIndexRequest, UpdateProjectIndexRequest,
};
use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::json_text::FieldDiagnostic;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Projects, project indexes and achievements for a portfolio site. \
                       Every non-GET route requires the `x-api-key` header."
    ),
    paths(
        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Project detail endpoints
        crate::modules::project::adapter::incoming::web::routes::get_project_detail_handler,
        crate::modules::project::adapter::incoming::web::routes::upsert_project_detail_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_detail_handler,

        // Project index endpoints
        crate::modules::project_index::adapter::incoming::web::routes::get_project_indexes_handler,
        crate::modules::project_index::adapter::incoming::web::routes::get_project_index_handler,
        crate::modules::project_index::adapter::incoming::web::routes::create_project_index_handler,
        crate::modules::project_index::adapter::incoming::web::routes::update_project_index_handler,
        crate::modules::project_index::adapter::incoming::web::routes::delete_project_index_handler,

        // Achievement endpoints
        crate::modules::achievement::adapter::incoming::web::routes::get_achievements_handler,
        crate::modules::achievement::adapter::incoming::web::routes::get_achievement_handler,
        crate::modules::achievement::adapter::incoming::web::routes::create_achievement_handler,
        crate::modules::achievement::adapter::incoming::web::routes::update_achievement_handler,
        crate::modules::achievement::adapter::incoming::web::routes::delete_achievement_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,
            MessageData,
            FieldDiagnostic,

            // Projects
            CreateProjectRequest,
            UpdateProjectRequest,
            FeatureInput,
            GoalInput,
            TimelineInput,
            TeamMemberInput,
            ProjectView,
            FeatureItem,
            GoalItem,
            TimelineItem,
            TeamMemberItem,
            ProjectDetailItem,
            ProjectDetailView,
            Flowchart,

            // Project indexes
            CreateProjectIndexRequest,
            UpdateProjectIndexRequest,
            ProjectIndex,

            // Achievements
            Achievement
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "projects", description = "Projects with their features, goals, timeline, team and detail"),
        (name = "project-index", description = "Project cards for listing pages"),
        (name = "achievements", description = "Awards and certifications with an optional image"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "ApiKeyAuth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    API_KEY_HEADER,
                    "Application key configured as APP_KEY",
                ))),
            )
        }
    }
}
