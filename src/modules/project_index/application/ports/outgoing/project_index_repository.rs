use async_trait::async_trait;

use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::lookup_key::LookupKey;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateProjectIndexData {
    pub project_id: String,
    pub project_title: String,
    pub project_subtitle: Option<String>,
    pub project_cover_img: Option<String>,
    pub project_tech_stacks: Vec<String>,
    pub project_link: Option<String>,
    pub github_link: Option<String>,
    pub project_status: Option<String>,
    pub personal: bool,
}

/// `None` / `PatchField::Unset` keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProjectIndexData {
    pub project_title: Option<String>,
    pub project_subtitle: PatchField<String>,
    pub project_cover_img: PatchField<String>,
    pub project_tech_stacks: Option<Vec<String>>,
    pub project_link: PatchField<String>,
    pub github_link: PatchField<String>,
    pub project_status: PatchField<String>,
    pub personal: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectIndexRepositoryError {
    #[error("Project index not found")]
    NotFound,

    #[error("Project id already exists")]
    ProjectIdAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectIndexRepository: Send + Sync {
    /// Oldest first.
    async fn list(&self) -> Result<Vec<ProjectIndex>, ProjectIndexRepositoryError>;

    async fn find(&self, key: &LookupKey) -> Result<ProjectIndex, ProjectIndexRepositoryError>;

    async fn create(
        &self,
        data: CreateProjectIndexData,
    ) -> Result<ProjectIndex, ProjectIndexRepositoryError>;

    async fn update(
        &self,
        key: &LookupKey,
        data: UpdateProjectIndexData,
    ) -> Result<ProjectIndex, ProjectIndexRepositoryError>;

    async fn delete(&self, key: &LookupKey) -> Result<(), ProjectIndexRepositoryError>;
}
