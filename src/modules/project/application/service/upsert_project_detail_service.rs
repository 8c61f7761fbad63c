use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    UpsertProjectDetailError, UpsertProjectDetailUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError, UpsertProjectDetailData, UpsertedProjectDetail,
};
use crate::shared::lookup_key::LookupKey;

pub struct UpsertProjectDetailService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpsertProjectDetailService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpsertProjectDetailUseCase for UpsertProjectDetailService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        key: &LookupKey,
        data: UpsertProjectDetailData,
    ) -> Result<UpsertedProjectDetail, UpsertProjectDetailError> {
        self.project_repository
            .upsert_detail(key, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpsertProjectDetailError::ProjectNotFound,
                other => UpsertProjectDetailError::RepositoryError(other.to_string()),
            })
    }
}
