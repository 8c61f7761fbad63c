use async_trait::async_trait;
use std::fmt;

use crate::modules::project_index::application::ports::outgoing::{
    ProjectIndexRepository, ProjectIndexRepositoryError, UpdateProjectIndexData,
};
use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::lookup_key::LookupKey;

#[derive(Debug, Clone)]
pub enum UpdateProjectIndexError {
    ValidationFailed(Vec<&'static str>),
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateProjectIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProjectIndexError::ValidationFailed(fields) => {
                write!(f, "Required fields cannot be blank: {}", fields.join(", "))
            }
            UpdateProjectIndexError::NotFound => write!(f, "Project index not found"),
            UpdateProjectIndexError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IUpdateProjectIndexUseCase: Send + Sync {
    async fn execute(
        &self,
        key: &LookupKey,
        data: UpdateProjectIndexData,
    ) -> Result<ProjectIndex, UpdateProjectIndexError>;
}

pub struct UpdateProjectIndexUseCase<R: ProjectIndexRepository> {
    repository: R,
}

impl<R: ProjectIndexRepository> UpdateProjectIndexUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProjectIndexUseCase for UpdateProjectIndexUseCase<R>
where
    R: ProjectIndexRepository + Send + Sync,
{
    async fn execute(
        &self,
        key: &LookupKey,
        data: UpdateProjectIndexData,
    ) -> Result<ProjectIndex, UpdateProjectIndexError> {
        if data
            .project_title
            .as_deref()
            .is_some_and(|t| t.trim().is_empty())
        {
            return Err(UpdateProjectIndexError::ValidationFailed(vec![
                "project_title",
            ]));
        }

        self.repository.update(key, data).await.map_err(|e| match e {
            ProjectIndexRepositoryError::NotFound => UpdateProjectIndexError::NotFound,
            other => UpdateProjectIndexError::RepositoryError(other.to_string()),
        })
    }
}
