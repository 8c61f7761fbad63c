use async_trait::async_trait;
use std::fmt;

use crate::modules::project_index::application::ports::outgoing::{
    ProjectIndexRepository, ProjectIndexRepositoryError,
};
use crate::modules::project_index::domain::entities::ProjectIndex;
use crate::shared::lookup_key::LookupKey;

#[derive(Debug, Clone)]
pub enum FetchProjectIndexError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for FetchProjectIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchProjectIndexError::NotFound => write!(f, "Project index not found"),
            FetchProjectIndexError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

/// Looks up one index by internal UUID or by `project_id`.
#[async_trait]
pub trait IFetchProjectIndexUseCase: Send + Sync {
    async fn execute(&self, key: &LookupKey) -> Result<ProjectIndex, FetchProjectIndexError>;
}

pub struct FetchProjectIndexUseCase<R: ProjectIndexRepository> {
    repository: R,
}

impl<R: ProjectIndexRepository> FetchProjectIndexUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchProjectIndexUseCase for FetchProjectIndexUseCase<R>
where
    R: ProjectIndexRepository + Send + Sync,
{
    async fn execute(&self, key: &LookupKey) -> Result<ProjectIndex, FetchProjectIndexError> {
        self.repository.find(key).await.map_err(|e| match e {
            ProjectIndexRepositoryError::NotFound => FetchProjectIndexError::NotFound,
            other => FetchProjectIndexError::RepositoryError(other.to_string()),
        })
    }
}
