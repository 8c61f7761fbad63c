use async_trait::async_trait;
use std::fmt;
use tracing::warn;

use crate::modules::project_index::application::ports::outgoing::{
    CreateProjectIndexData, ProjectIndexRepository, ProjectIndexRepositoryError,
};
use crate::modules::project_index::domain::entities::ProjectIndex;

#[derive(Debug, Clone)]
pub enum CreateProjectIndexError {
    /// Every required field that was missing or blank.
    ValidationFailed(Vec<&'static str>),
    ProjectIdAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for CreateProjectIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectIndexError::ValidationFailed(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            CreateProjectIndexError::ProjectIdAlreadyExists => {
                write!(f, "Project id already exists")
            }
            CreateProjectIndexError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ICreateProjectIndexUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreateProjectIndexData,
    ) -> Result<ProjectIndex, CreateProjectIndexError>;
}

pub struct CreateProjectIndexUseCase<R: ProjectIndexRepository> {
    repository: R,
}

impl<R: ProjectIndexRepository> CreateProjectIndexUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateProjectIndexUseCase for CreateProjectIndexUseCase<R>
where
    R: ProjectIndexRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreateProjectIndexData,
    ) -> Result<ProjectIndex, CreateProjectIndexError> {
        let mut missing = Vec::new();
        if data.project_id.trim().is_empty() {
            missing.push("project_id");
        }
        if data.project_title.trim().is_empty() {
            missing.push("project_title");
        }
        if !missing.is_empty() {
            warn!(fields = ?missing, "Rejected project index without required fields");
            return Err(CreateProjectIndexError::ValidationFailed(missing));
        }

        self.repository.create(data).await.map_err(|e| match e {
            ProjectIndexRepositoryError::ProjectIdAlreadyExists => {
                CreateProjectIndexError::ProjectIdAlreadyExists
            }
            other => CreateProjectIndexError::RepositoryError(other.to_string()),
        })
    }
}
