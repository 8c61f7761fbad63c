use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectView;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
use crate::shared::lookup_key::LookupKey;

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        key: &LookupKey,
        data: UpdateProjectData,
    ) -> Result<ProjectView, UpdateProjectError> {
        if matches!(&data.project_title, Some(title) if title.trim().is_empty()) {
            return Err(UpdateProjectError::ValidationFailed(vec!["project_title"]));
        }

        self.project_repository
            .update_project(key, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::TransactionFailed(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
                other => UpdateProjectError::RepositoryError(other.to_string()),
            })
    }
}
