use async_trait::async_trait;
use tracing::warn;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: CreateProjectData) -> Result<ProjectView, CreateProjectError> {
        let missing = missing_required(&data);
        if !missing.is_empty() {
            warn!(fields = ?missing, "Project create rejected");
            return Err(CreateProjectError::ValidationFailed(missing));
        }

        self.project_repository
            .create_project(data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::ProjectIdAlreadyExists => {
                    CreateProjectError::ProjectIdAlreadyExists
                }
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::TransactionFailed(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound | ProjectRepositoryError::DetailNotFound => {
                    CreateProjectError::RepositoryError(
                        "unexpected not found while creating project".to_string(),
                    )
                }
            })
    }
}

fn missing_required(data: &CreateProjectData) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if data.project_id.trim().is_empty() {
        missing.push("project_id");
    }
    if data.project_title.trim().is_empty() {
        missing.push("project_title");
    }
    missing
}
