// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::modules::project::application::ports::outgoing::project_query::{
    Flowchart, ProjectDetailView, ProjectView,
};
use crate::shared::lookup_key::LookupKey;
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Child rows (written wholesale)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeatureInput {
    pub feature_name: String,
    #[serde(default)]
    pub feature_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GoalInput {
    pub goal_name: String,
    #[serde(default)]
    pub goal_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimelineInput {
    pub timeline_name: String,
    #[serde(default)]
    pub timeline_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberInput {
    pub member_name: String,
    #[serde(default)]
    pub member_role: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateProjectData {
    /// Business key; immutable after creation
    pub project_id: String,
    pub project_title: String,
    pub project_subtitle: Option<String>,
    pub project_cover_img: Option<String>,
    pub project_description: Option<String>,
    pub project_tech_stacks: Vec<String>,
    pub technical_specifications: Option<Value>,
    pub project_link: Option<String>,
    pub github_link: Option<String>,
    pub project_status: Option<String>,
    pub personal: bool,
    pub features: Vec<FeatureInput>,
    pub goals: Vec<GoalInput>,
    pub timeline: Vec<TimelineInput>,
    pub team_members: Vec<TeamMemberInput>,
}

/// Update semantics:
/// - non-null scalars: None => keep, Some => replace
/// - nullable scalars: PatchField (Unset keeps, Null clears)
/// - child collections: None => keep, Some(vec) => replace wholesale
///   (an empty vec clears the collection)
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub project_title: Option<String>,
    pub project_subtitle: PatchField<String>,
    pub project_cover_img: PatchField<String>,
    pub project_description: PatchField<String>,
    pub project_tech_stacks: Option<Vec<String>>,
    pub technical_specifications: PatchField<Value>,
    pub project_link: PatchField<String>,
    pub github_link: PatchField<String>,
    pub project_status: PatchField<String>,
    pub personal: Option<bool>,
    pub features: Option<Vec<FeatureInput>>,
    pub goals: Option<Vec<GoalInput>>,
    pub timeline: Option<Vec<TimelineInput>>,
    pub team_members: Option<Vec<TeamMemberInput>>,
}

impl UpdateProjectData {
    pub fn touches_children(&self) -> bool {
        self.features.is_some()
            || self.goals.is_some()
            || self.timeline.is_some()
            || self.team_members.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpsertProjectDetailData {
    /// None keeps the stored images (empty list when creating)
    pub project_images: Option<Vec<String>>,
    pub project_flowchart: Flowchart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertedProjectDetail {
    /// True when this call created the detail record
    pub created: bool,
    pub detail: ProjectDetailView,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Project detail not found")]
    DetailNotFound,

    /// Unique business key violated at INSERT time.
    #[error("Project id already exists")]
    ProjectIdAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side; every method is one transaction)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Parent and children in one transaction.
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError>;

    /// Provided child collections are replaced in the same transaction.
    async fn update_project(
        &self,
        key: &LookupKey,
        data: UpdateProjectData,
    ) -> Result<ProjectView, ProjectRepositoryError>;

    /// Removes children, detail and parent together.
    async fn delete_project(&self, key: &LookupKey) -> Result<(), ProjectRepositoryError>;

    /// Updates the detail in place or creates it and sets `is_details`.
    async fn upsert_detail(
        &self,
        key: &LookupKey,
        data: UpsertProjectDetailData,
    ) -> Result<UpsertedProjectDetail, ProjectRepositoryError>;

    /// Removes the detail and clears `is_details`.
    async fn delete_detail(&self, key: &LookupKey) -> Result<(), ProjectRepositoryError>;
}
