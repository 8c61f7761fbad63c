use async_trait::async_trait;
use std::fmt;

use crate::modules::project_index::application::ports::outgoing::ProjectIndexRepository;
use crate::modules::project_index::domain::entities::ProjectIndex;

#[derive(Debug, Clone)]
pub enum FetchProjectIndexesError {
    RepositoryError(String),
}

impl fmt::Display for FetchProjectIndexesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchProjectIndexesError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IFetchProjectIndexesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectIndex>, FetchProjectIndexesError>;
}

pub struct FetchProjectIndexesUseCase<R: ProjectIndexRepository> {
    repository: R,
}

impl<R: ProjectIndexRepository> FetchProjectIndexesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchProjectIndexesUseCase for FetchProjectIndexesUseCase<R>
where
    R: ProjectIndexRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectIndex>, FetchProjectIndexesError> {
        self.repository
            .list()
            .await
            .map_err(|e| FetchProjectIndexesError::RepositoryError(e.to_string()))
    }
}
