use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectDetailError, DeleteProjectDetailUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::lookup_key::LookupKey;

pub struct DeleteProjectDetailService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> DeleteProjectDetailService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> DeleteProjectDetailUseCase for DeleteProjectDetailService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, key: &LookupKey) -> Result<(), DeleteProjectDetailError> {
        self.project_repository
            .delete_detail(key)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => DeleteProjectDetailError::ProjectNotFound,
                ProjectRepositoryError::DetailNotFound => DeleteProjectDetailError::DetailNotFound,
                other => DeleteProjectDetailError::RepositoryError(other.to_string()),
            })
    }
}
